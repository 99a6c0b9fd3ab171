use rubberband::Arrangement;
use std::fmt::Write;

/// Render the qualitative analysis for an arrangement followed by the
/// computed force.
///
/// The force is rounded to two decimals, which is plenty for normalized
/// quantities in the `0..=2` displacement range.
#[must_use]
pub fn render_analysis(arrangement: Arrangement, force: f64) -> String {
    let mut output = String::new();

    writeln!(&mut output, "\n{} Arrangement Analysis:", arrangement.label())
        .expect("writing to string cannot fail");
    for line in arrangement.characteristics() {
        writeln!(&mut output, "- {line}").expect("writing to string cannot fail");
    }

    writeln!(&mut output, "\nCalculated force: {force:.2}").expect("writing to string cannot fail");

    output
}
