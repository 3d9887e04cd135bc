use console::Style;
use viewstate_core::config::OverlayConfig;
use viewstate_core::overlay::OverlayState;

struct Styles {
    title: Style,
    label: Style,
    value: Style,
    loading: Style,
    errored: Style,
    disabled: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            loading: Style::new().yellow(),
            errored: Style::new().red().bold(),
            disabled: Style::new().dim().yellow(),
        }
    }

    fn state(&self, state: &OverlayState) -> &Style {
        match state {
            OverlayState::Idle => &self.value,
            OverlayState::Loading => &self.loading,
            OverlayState::Errored(_) => &self.errored,
        }
    }
}

/// One row of the `assign` table.
pub struct Assignment {
    pub viewport_id: String,
    pub display_sets: usize,
    pub presentation_id: Option<String>,
}

pub fn print_assignments(kind: &str, rows: &[Assignment]) {
    let s = Styles::new();

    println!();
    println!("  {}", s.title.apply_to(kind));
    println!();
    println!(
        "  {:<20}{:>6}  {}",
        s.label.apply_to("Viewport"),
        s.label.apply_to("Sets"),
        s.label.apply_to("Presentation id")
    );

    for row in rows {
        let id = match row.presentation_id {
            Some(ref id) => s.value.apply_to(id.clone()),
            None => s.disabled.apply_to("(none)".to_string()),
        };
        println!("  {:<20}{:>6}  {}", row.viewport_id, row.display_sets, id);
    }
    println!();
}

pub fn print_replay_step(index: usize, event: &str, transitions: &[OverlayState]) {
    let s = Styles::new();

    let outcome = if transitions.is_empty() {
        s.label.apply_to("no change".to_string())
    } else {
        let text = transitions
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        let style = transitions.last().map_or(&s.value, |t| s.state(t));
        style.apply_to(format!("-> {text}"))
    };
    println!("  {:>3}  {:<36}{}", index, event, outcome);
}

pub fn print_final_state(state: &OverlayState, texts: &OverlayConfig) {
    let s = Styles::new();

    println!();
    println!(
        "  {:<14}{}",
        s.label.apply_to("Final state"),
        s.state(state).apply_to(state)
    );
    for line in state.describe(texts) {
        println!("  {:<14}{}", "", s.state(state).apply_to(line));
    }
}
