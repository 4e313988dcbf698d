use crate::normalize::NormalizedGroup;
use crate::zero_run::CompressionChoice;

/// Joins normalized groups back into text, replacing the chosen run
/// with `::`.
///
/// The groups before and after the run are joined independently and the
/// marker goes between them, so a run at either boundary yields a leading
/// or trailing `::`, and a run covering every group yields exactly `::`.
/// Groups are never empty, so the output holds at most one `::` and never
/// three colons in a row.
pub fn serialize(groups: &[NormalizedGroup], choice: CompressionChoice) -> String {
    match choice.run() {
        Some(run) if run.start < run.end && run.end <= groups.len() => {
            let mut out = String::with_capacity(groups.len() * 5);
            push_joined(&mut out, &groups[..run.start]);
            out.push_str("::");
            push_joined(&mut out, &groups[run.end..]);
            out
        }
        _ => {
            let mut out = String::with_capacity(groups.len() * 5);
            push_joined(&mut out, groups);
            out
        }
    }
}

fn push_joined(out: &mut String, groups: &[NormalizedGroup]) {
    for (i, group) in groups.iter().enumerate() {
        if i > 0 {
            out.push(':');
        }
        out.push_str(group.as_str());
    }
}
