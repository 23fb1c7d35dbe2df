use crate::font::Face;
use crate::units::Pt;

/// Calculate the width of a row of text in whole pixels by summing the rounded advance
/// of every character. Characters the face can't resolve contribute nothing.
///
/// Widths are summed as `i64`: a single advance fits an `i32`, but a row of them at
/// very large sizes doesn't.
pub fn width_of_text<F: Face>(text: &str, face: &F) -> i64 {
    text.chars()
        .filter_map(|ch| face.advance(ch))
        .map(i64::from)
        .sum()
}

/// The pixel width of the widest row, or 0 when there are no rows
pub fn widest_row<F: Face, S: AsRef<str>>(rows: &[S], face: &F) -> i64 {
    rows.iter()
        .map(|row| width_of_text(row.as_ref(), face))
        .max()
        .unwrap_or(0)
}

/// Vertical distance between consecutive baselines, rounded up to whole pixels
pub fn row_height_px(size: Pt, dpi: f64, row_spacing: f64) -> i32 {
    (size.to_px(dpi) * row_spacing).ceil() as i32
}

/// Baseline y coordinates for `row_count` rows. The first baseline sits one full row
/// height below the top edge.
pub fn baselines(row_count: usize, row_height: i32) -> impl Iterator<Item = i32> {
    (1..=row_count as i32).map(move |row| row * row_height)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::fake::{BlockMetrics, UNMAPPED};
    use crate::font::GlyphMetrics;

    #[test]
    fn sums_rounded_advances() {
        let face = BlockMetrics.face(Pt(10.0), 72.0);
        assert_eq!(width_of_text("abcd", &face), 20);
        assert_eq!(width_of_text("", &face), 0);
    }

    #[test]
    fn unresolvable_characters_add_no_width() {
        let face = BlockMetrics.face(Pt(10.0), 72.0);
        let text = format!("a{UNMAPPED}b{UNMAPPED}");
        assert_eq!(width_of_text(&text, &face), 10);
    }

    #[test]
    fn widest_row_ignores_row_order() {
        let face = BlockMetrics.face(Pt(10.0), 72.0);
        assert_eq!(widest_row(&["ab", "abcdef", "", "abc"], &face), 30);
        assert_eq!(widest_row::<_, &str>(&[], &face), 0);
    }

    #[test]
    fn wide_rows_do_not_overflow() {
        // each block is 5e8px, five of them pass i32::MAX
        let face = BlockMetrics.face(Pt(1e9), 72.0);
        assert_eq!(width_of_text("aaaaa", &face), 2_500_000_000);
        assert_eq!(widest_row(&["a", "aaaaa"], &face), 2_500_000_000);
    }

    #[test]
    fn row_height_rounds_up() {
        assert_eq!(row_height_px(Pt(10.0), 72.0, 1.0), 10);
        assert_eq!(row_height_px(Pt(10.0), 72.0, 1.01), 11);
        assert_eq!(row_height_px(Pt(36.0), 144.0, 1.5), 108);
    }

    #[test]
    fn first_baseline_is_one_row_down() {
        let ys: Vec<i32> = baselines(3, 12).collect();
        assert_eq!(ys, vec![12, 24, 36]);
        assert_eq!(baselines(0, 12).count(), 0);
    }
}
