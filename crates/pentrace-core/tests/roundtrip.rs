// crates/pentrace-core/tests/roundtrip.rs

use pentrace_core::format::text::parse_grid;
use pentrace_core::{draw, encode, Grid};

fn lcg_next(x: &mut u64) -> u64 {
    // deterministic, not crypto
    *x = x.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
    *x
}

fn assert_roundtrip(g: &Grid) -> usize {
    let d = encode(g).expect("encode ok");
    assert_eq!((d.height, d.width), (g.height(), g.width()));
    let back = draw(&d).expect("decode ok");
    assert_eq!(&back, g, "round trip mismatch\nsource:\n{g}\ndecoded:\n{back}");
    d.commands.len()
}

#[test]
fn uniform_image_needs_no_commands() {
    let g = parse_grid("00\n00\n00\n00\n").unwrap();
    let d = encode(&g).unwrap();
    assert!(d.commands.is_empty());
    assert_eq!(d.background, 0);
    assert_eq!(draw(&d).unwrap(), g);
}

#[test]
fn column_edits_roundtrip() {
    let g = parse_grid("00\n10\n12\n00\n").unwrap();
    assert_roundtrip(&g);
}

#[test]
fn disjoint_pixels_need_a_relocation() {
    let g = parse_grid("10000\n00000\n00000\n00001\n").unwrap();
    let d = encode(&g).unwrap();
    assert!(
        d.commands.iter().any(|c| c.paint.is_none()),
        "expected a pen-up move between the two pixels: {d}"
    );
    assert_eq!(draw(&d).unwrap(), g);
}

#[test]
fn straight_lines_are_cheap() {
    // a frame: four straight sides
    let g = parse_grid(
        "0000000\n\
         0111110\n\
         0100010\n\
         0100010\n\
         0111110\n\
         0000000\n",
    )
    .unwrap();
    let n = assert_roundtrip(&g);
    assert!(n <= 7, "frame took {n} commands");
}

#[test]
fn nested_colors_roundtrip() {
    let g = parse_grid(
        "000000000\n\
         011111110\n\
         012222210\n\
         012333210\n\
         012343210\n\
         012333210\n\
         012222210\n\
         011111110\n\
         000000000\n",
    )
    .unwrap();
    assert_roundtrip(&g);
}

#[test]
fn full_width_rows_roundtrip() {
    let g = parse_grid("1111\n0000\n2222\n0000\n3333\n0000\n").unwrap();
    assert_roundtrip(&g);
}

#[test]
fn single_row_and_single_column() {
    assert_roundtrip(&parse_grid("0120120\n").unwrap());
    assert_roundtrip(&parse_grid("0\n1\n2\n1\n0\n3\n").unwrap());
    assert_roundtrip(&parse_grid("5\n").unwrap());
}

#[test]
fn checkerboard_roundtrip() {
    let mut rows = Vec::new();
    for y in 0..12 {
        let row: Vec<u8> = (0..12).map(|x| if (x + y) % 2 == 0 { 0 } else { 9 }).collect();
        rows.push(row);
    }
    assert_roundtrip(&Grid::from_rows(&rows).unwrap());
}

#[test]
fn pseudo_random_images_roundtrip() {
    let mut seed: u64 = 0x5eed_1234_abcd_0001;
    for &(h, w, colors) in &[(5usize, 7usize, 2u64), (9, 9, 4), (16, 12, 8), (20, 20, 16), (3, 30, 5)] {
        for _ in 0..4 {
            let rows: Vec<Vec<u8>> = (0..h)
                .map(|_| (0..w).map(|_| ((lcg_next(&mut seed) >> 33) % colors) as u8).collect())
                .collect();
            assert_roundtrip(&Grid::from_rows(&rows).unwrap());
        }
    }
}
