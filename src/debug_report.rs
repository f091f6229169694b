use gulu::{Engine, Lang, Outcome, Value};

mod ansi {
    pub const RESET: &str = "\x1b[0m";
    pub const DIM: &str = "\x1b[2m";
    pub const BOLD: &str = "\x1b[1m";

    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const BLUE: &str = "\x1b[34m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GRAY: &str = "\x1b[90m";

    pub struct Palette {
        enabled: bool,
    }

    impl Palette {
        pub fn new(enabled: bool) -> Self {
            Self { enabled }
        }

        pub fn paint(&self, s: impl AsRef<str>, color: &str) -> String {
            if self.enabled { format!("{}{}{}", color, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn bold(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", BOLD, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn dim(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", DIM, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }
    }
}

pub struct TraceEvent {
    pub label: String,
    pub outcome: Outcome,
    pub values: Vec<(&'static str, Value)>,
}

pub fn print_session(engine: &Engine, events: &[TraceEvent], lang: Lang, color: bool) {
    let palette = ansi::Palette::new(color);
    let def = engine.lesson();

    println!(
        "\n{}",
        palette.bold(palette.paint(format!("⚙  Lesson: {}", def.title.get(lang)), ansi::CYAN))
    );
    println!("{}", palette.dim(def.description.get(lang)));

    println!("\n{}", palette.paint("━━━ Transitions ━━━", ansi::GRAY));
    if events.is_empty() {
        println!("{}", palette.dim("  No interactions"));
    }
    for (idx, event) in events.iter().enumerate() {
        print_event(engine, idx, event, lang, &palette);
    }

    println!("\n{}", palette.paint("━━━ Final state ━━━", ansi::GRAY));
    print_values(&engine.current_values(), &palette);
    let (phase, step) = (engine.current_phase(), engine.current_step());
    println!(
        "  {} {}  {} {}/{}",
        palette.dim("phase:"),
        palette.paint(phase.0, ansi::BLUE),
        palette.dim("step:"),
        palette.paint(step.to_string(), ansi::YELLOW),
        def.max_steps
    );
    if let Some(key) = engine.prompt_key() {
        println!("  {} {}", palette.dim("prompt:"), engine.render_feedback(key, lang));
    }
    println!();
}

fn print_event(engine: &Engine, idx: usize, event: &TraceEvent, lang: Lang, palette: &ansi::Palette) {
    let status = if !event.outcome.matched {
        palette.dim("✗ MISS".to_string())
    } else {
        match event.outcome.correct {
            Some(false) => palette.paint("✗ WRONG", ansi::YELLOW),
            Some(true) => palette.paint("✓ OK", ansi::GREEN),
            None => palette.paint("✓ HIT", ansi::GREEN),
        }
    };

    println!(
        "  {} {} {} {} {}  {} {}",
        palette.paint(format!("[{idx}]"), ansi::GRAY),
        palette.bold(&event.label),
        status,
        palette.dim("→"),
        palette.paint(event.outcome.phase.0, ansi::BLUE),
        palette.dim("step"),
        palette.paint(event.outcome.step.to_string(), ansi::YELLOW),
    );

    if !event.outcome.changed.is_empty() {
        let changed: Vec<String> = event
            .outcome
            .changed
            .iter()
            .map(|name| {
                let value = event
                    .values
                    .iter()
                    .find(|(n, _)| n == name)
                    .map(|(_, v)| v.display())
                    .unwrap_or_else(|| "?".to_string());
                format!("{name}={value}")
            })
            .collect();
        println!("      {} {}", palette.dim("changed:"), palette.paint(changed.join(", "), ansi::CYAN));
    }

    if let Some(key) = event.outcome.feedback {
        // Rendered against the final store; live values may have moved on
        // since, which is what a learner replaying the session would see.
        println!("      {} {}", palette.dim("gulu:"), engine.render_feedback(key, lang));
    }
}

fn print_values(values: &[(&'static str, Value)], palette: &ansi::Palette) {
    let rendered: Vec<String> = values.iter().map(|(name, value)| format!("{name}={}", value.display())).collect();
    println!("  {}", palette.paint(rendered.join("  "), ansi::GREEN));
}
