use super::labels::FieldLabels;

const DAY_HEADING_PREFIX: &str = "## Day ";
const ACTIVITY_PREFIX: &str = "- **";
const BOLD_MARKER: &str = "**";
const BULLET_PREFIX: &str = "- ";

/// What a single trimmed line looks like, before the parser state is consulted.
///
/// Variants are tried in declaration order and the first shape that matches wins, so
/// a labeled field is never reported as a plain bullet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// `## Day <n>: <date>`
    DayHeading { day: u32, date: &'a str },
    /// A day heading whose number does not fit in `u32`
    OversizedDayHeading,
    /// `- **<name>**` with an optional `: <description>`
    ActivityHeading { name: &'a str, description: &'a str },
    OpeningHours(&'a str),
    EstimatedCost(&'a str),
    PriceCheckLink(&'a str),
    /// Any other `- <text>` bullet
    Bullet(&'a str),
    Other,
}

/// Classify one line that has already been trimmed.
pub fn classify<'a>(line: &'a str, labels: &FieldLabels) -> LineKind<'a> {
    if let Some((day, date)) = day_heading(line) {
        return match day {
            Some(day) => LineKind::DayHeading { day, date },
            None => LineKind::OversizedDayHeading,
        };
    }

    if let Some((name, description)) = activity_heading(line) {
        return LineKind::ActivityHeading { name, description };
    }

    if let Some(value) = labeled_field(line, &labels.opening_hours) {
        return LineKind::OpeningHours(value);
    }

    if let Some(value) = labeled_field(line, &labels.estimated_cost) {
        return LineKind::EstimatedCost(value);
    }

    if let Some(value) = labeled_field(line, &labels.price_check_link) {
        return LineKind::PriceCheckLink(value);
    }

    match line.strip_prefix(BULLET_PREFIX).map(str::trim) {
        Some(text) if !text.is_empty() => LineKind::Bullet(text),
        _ => LineKind::Other,
    }
}

fn day_heading(line: &str) -> Option<(Option<u32>, &str)> {
    let rest = line.strip_prefix(DAY_HEADING_PREFIX)?;
    let (number, date) = rest.split_once(": ")?;

    if number.is_empty() || !number.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let date = date.trim();
    if date.is_empty() {
        return None;
    }

    Some((number.parse::<u32>().ok(), date))
}

fn activity_heading(line: &str) -> Option<(&str, &str)> {
    let rest = line.strip_prefix(ACTIVITY_PREFIX)?;

    // The name runs up to the first asterisk, which must open the closing marker.
    let name_end = rest.find('*')?;
    let name = rest[..name_end].trim();
    let after = rest[name_end..].strip_prefix(BOLD_MARKER)?;

    if name.is_empty() {
        return None;
    }

    if after.is_empty() {
        return Some((name, ""));
    }

    let description = after.strip_prefix(':')?;
    Some((name, description.trim()))
}

fn labeled_field<'a>(line: &'a str, label: &str) -> Option<&'a str> {
    let value = line
        .strip_prefix(BULLET_PREFIX)?
        .strip_prefix(label)?
        .strip_prefix(": ")?
        .trim();

    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kind(line: &str) -> LineKind<'_> {
        classify(line, &FieldLabels::default())
    }

    #[test]
    fn test_day_heading() {
        assert_eq!(
            kind("## Day 2: 2024-05-10"),
            LineKind::DayHeading {
                day: 2,
                date: "2024-05-10"
            }
        );
        assert_eq!(
            kind("## Day 10: Arrival and old town"),
            LineKind::DayHeading {
                day: 10,
                date: "Arrival and old town"
            }
        );
    }

    #[test]
    fn test_malformed_day_headings_are_not_headings() {
        assert_eq!(kind("## Day two: 2024-05-10"), LineKind::Other);
        assert_eq!(kind("## Day 2 2024-05-10"), LineKind::Other);
        assert_eq!(kind("## Day 2:"), LineKind::Other);
        assert_eq!(kind("# Day 2: 2024-05-10"), LineKind::Other);
        assert_eq!(kind("### Day 2: 2024-05-10"), LineKind::Other);
        assert_eq!(kind("## Day -1: yesterday"), LineKind::Other);
    }

    #[test]
    fn test_oversized_day_number() {
        assert_eq!(
            kind("## Day 99999999999: far"),
            LineKind::OversizedDayHeading
        );
        assert_eq!(kind("## Day 99999999999:"), LineKind::Other);
    }

    #[test]
    fn test_activity_heading_with_and_without_description() {
        assert_eq!(
            kind("- **09:00 Visit Museum**: short text"),
            LineKind::ActivityHeading {
                name: "09:00 Visit Museum",
                description: "short text"
            }
        );
        assert_eq!(
            kind("- **Lunch at Warung**"),
            LineKind::ActivityHeading {
                name: "Lunch at Warung",
                description: ""
            }
        );
        assert_eq!(
            kind("- **Sunset**:"),
            LineKind::ActivityHeading {
                name: "Sunset",
                description: ""
            }
        );
    }

    #[test]
    fn test_bold_with_trailing_text_is_a_plain_bullet() {
        assert_eq!(
            kind("- **Note** bring sunscreen"),
            LineKind::Bullet("**Note** bring sunscreen")
        );
        assert_eq!(kind("- ** **"), LineKind::Bullet("** **"));
    }

    #[test]
    fn test_labeled_fields() {
        assert_eq!(
            kind("- Jam Buka/Tutup: 08:00 - 17:00"),
            LineKind::OpeningHours("08:00 - 17:00")
        );
        assert_eq!(
            kind("- Estimasi Biaya: IDR 20.000"),
            LineKind::EstimatedCost("IDR 20.000")
        );
        assert_eq!(
            kind("- Link Cek Harga: Temple Ticket"),
            LineKind::PriceCheckLink("Temple Ticket")
        );
    }

    #[test]
    fn test_labeled_field_without_value_is_a_bullet() {
        assert_eq!(
            kind("- Estimasi Biaya:"),
            LineKind::Bullet("Estimasi Biaya:")
        );
    }

    #[test]
    fn test_custom_labels() {
        let labels = FieldLabels::english();
        assert_eq!(
            classify("- Estimated Cost: USD 12", &labels),
            LineKind::EstimatedCost("USD 12")
        );
        assert_eq!(
            classify("- Estimasi Biaya: IDR 1", &labels),
            LineKind::Bullet("Estimasi Biaya: IDR 1")
        );
    }

    #[test]
    fn test_other_lines() {
        assert_eq!(kind("# Rencana Perjalanan untuk Bali"), LineKind::Other);
        assert_eq!(kind("Enjoy your trip!"), LineKind::Other);
        assert_eq!(kind("-"), LineKind::Other);
        assert_eq!(kind("* starred bullet"), LineKind::Other);
    }
}
