use std::path::Path;

use terrain::{RunParams, generate, render};

fn main() {
    // Generate a large height-map with one worker per available core
    let workers = std::thread::available_parallelism().map_or(4, |n| n.get()) as i64;
    let params = RunParams::new(512, 512, workers, 1000).unwrap();
    let report = generate(&params).unwrap();
    println!(
        "{} fault lines in {} ms, heights {}..={}",
        report.lines_applied,
        report.elapsed.as_millis(),
        report.snapshot.min,
        report.snapshot.max
    );

    // Save both renderings side by side
    let gray = render::render(&report.snapshot, render::Colormap::Gray).unwrap();
    let color = render::render(&report.snapshot, render::Colormap::Terrain).unwrap();
    render::save_png(&gray, Path::new("fault_gray.png")).unwrap();
    render::save_png(&color, Path::new("fault_terrain.png")).unwrap();
    println!("Saved fault_gray.png and fault_terrain.png");
}
