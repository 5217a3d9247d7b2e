//! Integration tests for the sentence segmenter.

use proptest::prelude::*;
use sentclean::{
    sanitize, segment, segment_with_max_len, SegmentOptions, Segmenter, DEFAULT_MAX_LEN,
};

#[test]
fn test_concrete_segmentation() {
    assert_eq!(
        segment("今天天气很好。明天也不错！"),
        vec!["今天天气很好。", "明天也不错！"]
    );
}

#[test]
fn test_concrete_quoted_span() {
    assert_eq!(
        segment("他说：“今天。天气好。”真的。"),
        vec!["他说：“今天。天气好。”", "真的。"]
    );
}

#[test]
fn test_all_bracket_kinds_are_atomic() {
    let spans = [
        "“甲。乙”",
        "（甲。乙）",
        "《甲。乙》",
        "〈甲。乙〉",
        "【甲。乙】",
        "‘甲。乙’",
        "「甲。乙」",
        "『甲。乙』",
        "\"甲。乙\"",
        "'甲。乙'",
    ];
    for span in spans {
        let text = format!("前文{}后文。", span);
        let sentences = segment(&text);
        assert_eq!(sentences, vec![text.clone()], "span {} was split", span);
    }
}

#[test]
fn test_square_brackets_are_plain_text() {
    assert_eq!(segment("见[注。意]后文。"), vec!["见[注。", "意]后文。"]);
}

#[test]
fn test_titles_and_asides_stay_inside_sentence() {
    assert_eq!(segment("看了《你好！》这部电影。"), vec!["看了《你好！》这部电影。"]);
    assert_eq!(segment("他（笑。）说好。"), vec!["他（笑。）说好。"]);
}

#[test]
fn test_segment_after_sanitize() {
    let raw = "<p>第一段文字。</p>\n<p>联系 x@y.com 。第二段！</p>";
    let sentences = segment(&sanitize(raw));
    assert_eq!(sentences, vec!["第一段文字。", "联系。", "第二段！"]);
}

#[test]
fn test_long_document_bound() {
    let sentence = "这是一个用于测试长度限制的句子";
    let text = format!("{}?{}!{}。", sentence, sentence, sentence);
    let sentences = segment_with_max_len(&text, 20).unwrap();
    assert_eq!(sentences.len(), 3);
    for s in &sentences {
        assert!(s.chars().count() <= 20, "too long: {}", s);
        assert!(s.ends_with('。'));
    }
}

#[test]
fn test_segmenter_reusable() {
    let segmenter = Segmenter::new(SegmentOptions::new().with_max_len(DEFAULT_MAX_LEN)).unwrap();
    let first = segmenter.segment("一。二。");
    let second = segmenter.segment("一。二。");
    assert_eq!(first, second);
}

proptest! {
    #[test]
    fn prop_concatenation_reconstructs_input(content in "[一二三ab。？！!?“”（）《》 ,]{0,60}") {
        let segmenter = Segmenter::with_max_len(usize::MAX).unwrap();
        let sentences = segmenter.segment(&content);
        prop_assert_eq!(sentences.concat(), content);
        prop_assert!(sentences.iter().all(|s| !s.is_empty()));
    }

    #[test]
    fn prop_length_bound_holds(parts in prop::collection::vec("[一二三abc]{1,19}", 1..10)) {
        let content = parts.iter().map(|p| format!("{}。", p)).collect::<String>();
        let sentences = segment_with_max_len(&content, 20).unwrap();
        prop_assert_eq!(sentences.len(), parts.len());
        for sentence in &sentences {
            prop_assert!(sentence.chars().count() <= 20);
        }
    }

    #[test]
    fn prop_quoted_span_never_split(
        before in "[一二三。！]{0,10}",
        first in "[一二三]{1,5}",
        second in "[一二三]{1,5}",
        after in "[一二三。！]{0,10}",
    ) {
        let span = format!("“{}。{}”", first, second);
        let content = format!("{}{}{}", before, span, after);
        let sentences = segment(&content);
        prop_assert!(sentences.iter().any(|s| s.contains(&span)));
    }
}
