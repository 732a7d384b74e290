use anyhow::Result;
use std::path::Path;
use thermo_hygrometric::io::{read_wall_set, write_summaries};
use thermo_hygrometric::sim::construction::presets;
use thermo_hygrometric::{Wall, compare_walls};

/// Analyse a set of walls and compare them.
///
/// Usage: `thermo-hygrometric [WALLS_JSON [SUMMARY_JSON]]`
///
/// Without arguments the two reference timber walls (3c and 3d) are used.
fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let walls: Vec<Wall> = match args.first() {
        Some(path) => read_wall_set(Path::new(path))?.walls,
        None => {
            let (wall_3c, wall_3d) = presets::comparison_walls()?;
            vec![wall_3c, wall_3d]
        }
    };

    for wall in &walls {
        println!("{}", wall.analyze()?);
        println!(
            "  Layers: {}",
            wall.layers()
                .iter()
                .map(|l| format!("{} ({:.0}mm)", l.name(), l.thickness() * 1000.0))
                .collect::<Vec<_>>()
                .join(" | ")
        );
        println!();
    }

    let summaries = compare_walls(&walls)?;

    println!("Comparison");
    println!("{:=<60}", "");
    print!("{:>32}", "");
    for s in &summaries {
        print!("  {:>10}", s.name);
    }
    println!();
    if let Some(first) = summaries.first() {
        for (i, (key, _)) in first.named_values().iter().enumerate() {
            print!("{key:>32}");
            for s in &summaries {
                print!("  {:>10.4}", s.named_values()[i].1);
            }
            println!();
        }
    }

    if let Some(out) = args.get(1) {
        write_summaries(Path::new(out), &summaries)?;
        println!();
        println!("Summaries written to {out}");
    }

    Ok(())
}
