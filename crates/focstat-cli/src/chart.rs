use crate::labels::Labels;
use focstat_core::FocalLengthDistribution;

const BAR: char = '█';

/// Plain text bar chart: one row per distinct focal length, ascending, with
/// bars scaled so the largest count spans `width` columns.
pub fn render_bar_chart(
    distribution: &FocalLengthDistribution,
    labels: &Labels,
    width: usize,
) -> String {
    let entries = distribution.entries();
    let max_count = entries.iter().map(|(_, count)| *count).max().unwrap_or(0);
    let key_width = entries
        .iter()
        .map(|(focal_length, _)| focal_length.to_string().len())
        .max()
        .unwrap_or(0);
    let width = width.max(1);

    let mut out = String::new();
    out.push_str(&labels.title);
    out.push('\n');
    out.push('\n');

    for (focal_length, count) in &entries {
        let bar_len = if max_count == 0 {
            0
        } else {
            // Any non-zero count gets at least one cell.
            ((count * width + max_count - 1) / max_count).max(1)
        };
        out.push_str(&format!(
            "{:>key_width$} mm │{} {}\n",
            focal_length.to_string(),
            BAR.to_string().repeat(bar_len),
            count,
            key_width = key_width,
        ));
    }

    out.push('\n');
    out.push_str(&format!("x: {}   y: {}\n", labels.x_label, labels.y_label));
    out
}
