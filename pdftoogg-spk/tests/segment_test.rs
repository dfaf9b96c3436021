//! Property tests for text segmentation

use pdftoogg_spk::segment::{segment_count, split_segments, MAX_SEGMENT_CHARS};
use proptest::prelude::*;

proptest! {
    #[test]
    fn test_segments_partition_text(text in "\\PC{0,200}", max in 1usize..40) {
        let segments = split_segments(&text, max);

        // Jointly exhaustive and in order
        prop_assert_eq!(segments.concat(), text.clone());

        // Count is the ceiling of chars / max
        prop_assert_eq!(segments.len(), segment_count(text.chars().count(), max));

        // Full windows followed by one non-empty remainder
        if let Some((last, full)) = segments.split_last() {
            for segment in full {
                prop_assert_eq!(segment.chars().count(), max);
            }
            let tail = last.chars().count();
            prop_assert!(tail >= 1 && tail <= max);
        }
    }

    #[test]
    fn test_count_is_ceiling_division(len in 0usize..1_000_000) {
        let count = segment_count(len, MAX_SEGMENT_CHARS);
        prop_assert!(count * MAX_SEGMENT_CHARS >= len);
        if count > 0 {
            prop_assert!((count - 1) * MAX_SEGMENT_CHARS < len);
        }
    }
}

#[test]
fn test_segment_count_table() {
    let expected = [(0, 0), (1, 1), (32_766, 1), (32_767, 2), (65_532, 2), (65_533, 3)];
    for (len, count) in expected {
        assert_eq!(segment_count(len, MAX_SEGMENT_CHARS), count, "length {len}");
        assert_eq!(split_segments(&"z".repeat(len), MAX_SEGMENT_CHARS).len(), count);
    }
}
