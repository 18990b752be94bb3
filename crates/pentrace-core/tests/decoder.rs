// crates/pentrace-core/tests/decoder.rs

use pentrace_core::format::checksum::{blake3_16, crc32};
use pentrace_core::format::text::{parse_drawing, parse_grid};
use pentrace_core::format::{binary, varint};
use pentrace_core::{draw, Canvas, Command, Direction, Drawing, PenError};

#[test]
fn worked_example_replays_step_by_step() {
    let d = parse_drawing("4\n2\n0\ndown 2 1\nright 1 2\nup 1\nup 1 9\n").unwrap();

    let mut canvas = Canvas::new(d.height, d.width, d.background).unwrap();
    let expected = ["00\n10\n10\n00\n", "00\n10\n12\n00\n", "00\n10\n12\n00\n", "09\n10\n12\n00\n"];
    for (i, (cmd, want)) in d.commands.iter().zip(expected).enumerate() {
        canvas.apply(i, cmd).unwrap();
        assert_eq!(canvas.grid().to_string(), want, "after command #{i}");
    }
    assert_eq!(canvas.cursor().x, 1);
    assert_eq!(canvas.cursor().y, 0);

    assert_eq!(draw(&d).unwrap(), parse_grid("09\n10\n12\n00\n").unwrap());
}

#[test]
fn empty_program_is_solid_background() {
    let d = Drawing::new(2, 4, 0xb);
    assert_eq!(draw(&d).unwrap().to_string(), "bbbb\nbbbb\n");
}

#[test]
fn later_paint_overwrites_earlier_paint() {
    let mut d = Drawing::new(1, 3, 0);
    d.push(Command::paint(Direction::Right, 2, 4));
    d.push(Command::paint(Direction::Left, 1, 5));
    assert_eq!(draw(&d).unwrap().cells(), &[0, 5, 4]);
}

#[test]
fn off_canvas_relocation_then_paint_back_in() {
    let mut d = Drawing::new(2, 3, 0);
    d.push(Command::relocate(Direction::Down, 1));
    d.push(Command::relocate(Direction::Left, 1));
    d.push(Command::paint(Direction::Right, 3, 7));
    assert_eq!(draw(&d).unwrap().to_string(), "000\n777\n");
}

#[test]
fn off_canvas_paint_is_rejected() {
    let mut d = Drawing::new(4, 2, 0);
    d.push(Command::paint(Direction::Down, 3, 1));
    d.push(Command::paint(Direction::Down, 1, 1));

    match draw(&d) {
        Err(PenError::OutOfCanvasPaint { command_index, x, y }) => {
            assert_eq!(command_index, 1);
            assert_eq!((x, y), (0, 4));
        }
        other => panic!("expected OutOfCanvasPaint, got {other:?}"),
    }

    let mut up = Drawing::new(4, 2, 0);
    up.push(Command::paint(Direction::Up, 1, 3));
    assert!(matches!(
        draw(&up),
        Err(PenError::OutOfCanvasPaint { command_index: 0, x: 0, y: -1 })
    ));
}

#[test]
fn invalid_header_is_rejected_before_replay() {
    let d = Drawing::new(2, 2, 16);
    assert!(matches!(draw(&d), Err(PenError::Validation(_))));
}

#[test]
fn oversized_header_is_an_error_not_a_panic() {
    let d = parse_drawing("10000000000\n10000000000\n0\n").unwrap();
    assert!(matches!(draw(&d), Err(PenError::Validation(_))));

    let d = parse_drawing("18446744073709551615\n2\n0\nright 1 1\n").unwrap();
    assert!(matches!(draw(&d), Err(PenError::Validation(_))));

    // same header in the packed form: well-formed bytes, refused on decode
    let mut b = b"PDR1".to_vec();
    b.extend_from_slice(&1u16.to_le_bytes());
    varint::put_u64(10_000_000_000, &mut b);
    varint::put_u64(10_000_000_000, &mut b);
    b.push(0);
    varint::put_u64(0, &mut b);
    let crc = crc32(&b);
    b.extend_from_slice(&crc.to_le_bytes());
    let id = blake3_16(&b);
    b.extend_from_slice(&id);

    assert!(matches!(binary::decode(&b), Err(PenError::Validation(_))));
    assert!(binary::encode(&d).is_err());
}
