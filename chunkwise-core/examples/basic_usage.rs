//! Basic usage of the chunkwise API

use chunkwise_core::{chunk_iter, chunk_slice, chunk_views, ChunkStrategy};
use std::io::{self, BufRead};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let data: Vec<u32> = (0..10).collect();

    println!("Owned copies:");
    for chunk in chunk_slice(&data, 3)? {
        println!("  {:?}", chunk);
    }

    println!("Borrowed views:");
    for view in chunk_views(&data, 4)? {
        println!("  {:?} -> {:?}", view.range(), view.as_slice());
    }

    println!("Strategies:");
    for strategy in ChunkStrategy::ALL {
        let chunks = strategy.split(&data, 5)?;
        println!("  {:<10} {:?}", strategy.name(), chunks);
    }

    // A zero size is rejected before anything is produced
    if let Err(e) = chunk_slice(&data, 0usize) {
        println!("Error: {}", e);
    }

    println!("Chunks of stdin lines (pairs):");
    let lines = io::stdin().lock().lines().map_while(|line| line.ok());
    for chunk in chunk_iter(lines, 2)? {
        println!("  {:?}", chunk);
    }

    Ok(())
}
