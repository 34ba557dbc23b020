//! Print the groupings for a Karnaugh map
//! Usage:
//!
//! ```bash
//! cargo run --example kmap 1101 1101 0110 0000
//! ```
//!
//! Each argument is one row of the map, written as `0` and `1` characters.

use kmap_groupings::{find_groupings, BooleanGrid, Grouping};

fn print_map(grid: &BooleanGrid, groupings: &[Grouping]) {
    for row in 0..grid.height() {
        let line: String = (0..grid.width())
            .map(|column| {
                match groupings
                    .iter()
                    .position(|grouping| grouping.contains(row, column))
                {
                    Some(index) => char::from_digit((index % 36) as u32, 36).unwrap_or('?'),
                    None => '.',
                }
            })
            .collect();
        println!("{line}");
    }
}

fn main() {
    let rows: Vec<Vec<u8>> = std::env::args()
        .skip(1)
        .map(|row| {
            row.chars()
                .map(|c| match c {
                    '0' => 0,
                    '1' => 1,
                    _ => u8::MAX,
                })
                .collect()
        })
        .collect();

    if rows.is_empty() {
        eprintln!("map rows needed");
        std::process::exit(1);
    }

    let grid = match BooleanGrid::from_int_rows(rows) {
        Ok(grid) => grid,
        Err(err) => {
            eprintln!("invalid map: {err}");
            std::process::exit(1);
        }
    };

    let groupings = match find_groupings(&grid) {
        Ok(groupings) => groupings,
        Err(err) => {
            eprintln!("could not group map: {err}");
            std::process::exit(1);
        }
    };

    for (index, grouping) in groupings.iter().enumerate() {
        println!(
            "{}: {} covering {} cells",
            char::from_digit((index % 36) as u32, 36).unwrap_or('?'),
            grouping,
            grouping.size()
        );
    }
    println!();
    print_map(&grid, &groupings);
}
