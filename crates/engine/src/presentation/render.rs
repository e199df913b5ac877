//! Text and JSON rendering of the panels.

use diceroller_domain::RollResult;

use super::mockup::{MockupButton, DICE_COUNT_BUTTONS, DIE_TYPE_BUTTONS, SAMPLE_VALUES};
use super::state::RollerState;
use crate::infrastructure::settings::OutputFormat;

pub const NO_ROLL_YET: &str = "No roll yet";

/// One cell per value, e.g. `[4] [2] [1]`
pub fn render_cells(values: &[u32]) -> String {
    values
        .iter()
        .map(|v| format!("[{v}]"))
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn render_result_text(result: Option<&RollResult>) -> String {
    match result {
        None => format!("Results\n  {NO_ROLL_YET}"),
        Some(result) => format!(
            "Results\n  {}\n  Sum: {}",
            render_cells(result.values()),
            result.sum()
        ),
    }
}

/// `null` before the first roll.
pub fn render_result_json(result: Option<&RollResult>) -> Result<String, serde_json::Error> {
    serde_json::to_string(&result)
}

pub fn render_result(
    result: Option<&RollResult>,
    output: OutputFormat,
) -> Result<String, serde_json::Error> {
    match output {
        OutputFormat::Text => Ok(render_result_text(result)),
        OutputFormat::Json => render_result_json(result),
    }
}

pub fn render_parameters(state: &RollerState) -> String {
    let config = state.configuration();
    let roll = if state.can_roll() {
        format!("enabled ({config})")
    } else {
        "disabled".to_string()
    };
    format!(
        "Parameters\n  Dice count: {}\n  Faces: {}\n  Sort: {}\n  Roll: {}",
        state.dice_text(),
        state.faces_text(),
        state.sort_mode(),
        roll
    )
}

/// Both sections of the functional roller panel.
pub fn render_roller(
    state: &RollerState,
    output: OutputFormat,
) -> Result<String, serde_json::Error> {
    Ok(format!(
        "{}\n{}",
        render_parameters(state),
        render_result(state.result(), output)?
    ))
}

pub fn render_mockup() -> String {
    let row = |buttons: Vec<MockupButton>| {
        buttons
            .iter()
            .map(|b| format!("({b})"))
            .collect::<Vec<_>>()
            .join(" ")
    };
    let dice = row(DICE_COUNT_BUTTONS.iter().map(|n| MockupButton::DiceCount(*n)).collect());
    let dies = row(DIE_TYPE_BUTTONS.iter().map(|f| MockupButton::DieType(*f)).collect());
    let sorts = row(
        diceroller_domain::SortMode::ALL
            .iter()
            .map(|m| MockupButton::Sort(*m))
            .collect(),
    );
    let sample = SAMPLE_VALUES
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    let sum: u32 = SAMPLE_VALUES.iter().sum();

    format!(
        "Static mock-up\n\
         Parameters\n  Dice count: {dice}\n  Die type: {dies}\n  Sort: {sorts}\n  ({roll})\n\
         Results (static sample)\n  Values: {sample}\n  Sum: {sum}\n\
         Every button only writes a debug log line.",
        roll = MockupButton::Roll,
    )
}

pub fn render_help() -> String {
    [
        "Commands:",
        "  tab static|roller   switch panel",
        "  dice <digits>       set the dice count (roller)",
        "  faces <digits>      set the face count (roller)",
        "  sort <mode>         none, asc or desc (roller)",
        "  roll                roll the dice (roller)",
        "  press <button>      press a mock-up button, e.g. 3, d8, roll (static)",
        "  show                redraw the current panel",
        "  help                this text",
        "  quit                exit",
    ]
    .join("\n")
}
