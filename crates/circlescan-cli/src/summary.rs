use std::path::Path;

use circlescan_core::pipeline::PipelineConfig;
use circlescan_core::stats::CircleStatistics;
use console::Style;

struct Styles {
    title: Style,
    header: Style,
    label: Style,
    value: Style,
    circle: Style,
    disabled: Style,
    path: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            header: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            circle: Style::new().green(),
            disabled: Style::new().dim().yellow(),
            path: Style::new().underlined(),
        }
    }
}

/// Header printed by `run` before any work starts.
pub fn print_run_header(input: &Path, config: &PipelineConfig) {
    let s = Styles::new();
    let d = &config.detection;

    println!();
    println!("  {}", s.title.apply_to("Circle Detection"));
    println!("  {}", s.title.apply_to("\u{2550}".repeat(16)));
    println!();

    println!(
        "  {:<14}{}",
        s.label.apply_to("Input"),
        s.path.apply_to(input.display())
    );
    match config.output {
        Some(ref path) => println!(
            "  {:<14}{}",
            s.label.apply_to("Output"),
            s.path.apply_to(path.display())
        ),
        None => println!(
            "  {:<14}{}",
            s.label.apply_to("Output"),
            s.disabled.apply_to("not saved")
        ),
    }
    if config.extract {
        println!(
            "  {:<14}{}",
            s.label.apply_to("Extract to"),
            s.path.apply_to(config.extract_dir.display())
        );
    }
    println!();

    println!("  {}", s.header.apply_to("Parameters"));
    println!(
        "    {:<12}{}",
        s.label.apply_to("Radius"),
        s.value.apply_to(format!("{} - {}", d.min_radius, d.max_radius))
    );
    println!(
        "    {:<12}{}",
        s.label.apply_to("dp"),
        s.value.apply_to(d.dp)
    );
    println!(
        "    {:<12}{}",
        s.label.apply_to("Min dist"),
        s.value.apply_to(d.min_dist)
    );
    println!(
        "    {:<12}{}",
        s.label.apply_to("Canny"),
        s.value.apply_to(d.param1)
    );
    println!(
        "    {:<12}{}",
        s.label.apply_to("Votes"),
        s.value.apply_to(d.param2)
    );
    println!();
}

/// Radius statistics and the circle list.
pub fn print_detection_summary(input: &Path, stats: &CircleStatistics) {
    let s = Styles::new();

    if stats.count == 0 {
        println!("  {}", s.disabled.apply_to("No circles detected!"));
        return;
    }

    println!(
        "  {} {}",
        s.header.apply_to(format!("Detected {} circles in", stats.count)),
        s.path.apply_to(input.display())
    );
    if let Some(avg) = stats.average_radius {
        println!(
            "    {:<16}{}",
            s.label.apply_to("Average radius"),
            s.value.apply_to(format!("{avg:.1}"))
        );
    }
    if let (Some(min), Some(max)) = (stats.min_radius, stats.max_radius) {
        println!(
            "    {:<16}{}",
            s.label.apply_to("Radius range"),
            s.value.apply_to(format!("{min} - {max}"))
        );
    }
    if let Some(std) = stats.std_radius {
        println!(
            "    {:<16}{}",
            s.label.apply_to("Std deviation"),
            s.value.apply_to(format!("{std:.2}"))
        );
    }
    println!();

    for (i, c) in stats.circles.iter().enumerate() {
        println!(
            "    {:<6}{}",
            s.label.apply_to(format!("#{}", i + 1)),
            s.circle
                .apply_to(format!("center ({}, {})  r={}", c.x, c.y, c.radius))
        );
    }
    println!();
}
