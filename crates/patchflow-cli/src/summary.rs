use console::Style;

use patchflow_core::matcher::{shrink_steps, MatchConfig};

struct Styles {
    title: Style,
    label: Style,
    value: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
        }
    }
}

pub fn print_run_summary(config: &MatchConfig, search_radius: f32) {
    let s = Styles::new();

    println!();
    println!("  {}", s.title.apply_to("Patchflow"));
    println!(
        "  {}",
        s.title
            .apply_to("\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}")
    );
    println!();

    println!(
        "  {:<16}{}",
        s.label.apply_to("Patch radius"),
        s.value.apply_to(config.patch_radius)
    );
    println!(
        "  {:<16}{}",
        s.label.apply_to("Max offset"),
        s.value.apply_to(config.max_offset)
    );
    println!(
        "  {:<16}{}",
        s.label.apply_to("Passes"),
        s.value.apply_to(config.passes)
    );
    println!(
        "  {:<16}{}",
        s.label.apply_to("Search ratio"),
        s.value.apply_to(config.search_ratio)
    );
    println!(
        "  {:<16}{}",
        s.label.apply_to("Search radius"),
        s.value.apply_to(search_radius)
    );
    println!(
        "  {:<16}{}",
        s.label.apply_to("Samples/pixel"),
        s.value
            .apply_to(shrink_steps(search_radius, config.search_ratio))
    );
    println!(
        "  {:<16}{}",
        s.label.apply_to("Seed"),
        s.value.apply_to(config.seed)
    );
    println!();
}
