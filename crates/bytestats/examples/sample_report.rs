//! Sample report for a 40-value byte array.
//!
//! Prints the array, sorts it in place, prints it again, and finishes with
//! the summary statistics.
//!
//! Expected output (abridged):
//!
//! ```text
//! Original Array:
//!
//! [ 34, 201, 190, 154,   8, 194,   2,   6, 114,  88,
//!  ...
//! Here is a summary of statistics for the array:
//! Mean:    94
//! Median:  88
//! Maximum: 250
//! Minimum: 2
//! ```

use bytestats::prelude::*;

fn main() -> Result<(), StatsError> {
    let mut test: [u8; 40] = [
        34, 201, 190, 154, 8, 194, 2, 6, 114, 88, 45, 76, 123, 87, 25, 23, 200, 122, 150, 90, 92,
        87, 177, 244, 201, 6, 12, 60, 8, 2, 5, 67, 7, 87, 250, 230, 99, 3, 100, 90,
    ];

    let stats = ArrayStats::new().build()?;

    println!("Original Array:\n");
    stats.print(&test);
    println!("\n");

    let outcome = stats.sort(&mut test);

    println!("Sorted Array:\n");
    stats.print(&test);
    println!("\n");

    print!("{}", stats.summarize(&mut test)?);

    println!();
    println!(
        "Sort used {} passes and {} swaps.",
        outcome.passes, outcome.swaps
    );

    Ok(())
}
