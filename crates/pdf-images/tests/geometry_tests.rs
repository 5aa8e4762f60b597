use pdf_images::*;
use proptest::prelude::*;

const USABLE_W: f32 = 190.0;
const USABLE_H: f32 = 277.0;

fn close(a: f32, b: f32) -> bool {
    (a - b).abs() <= 1e-3 * a.abs().max(b.abs()).max(1.0)
}

proptest! {
    #[test]
    fn small_images_keep_native_size(w in 0.1f32..190.0, h in 0.1f32..277.0) {
        prop_assert_eq!(compute_scale(w, h, USABLE_W, USABLE_H, false), (w, h));
    }

    #[test]
    fn oversized_images_fit_and_keep_aspect(w in 0.1f32..5000.0, h in 0.1f32..5000.0) {
        prop_assume!(w > USABLE_W || h > USABLE_H);
        let (nw, nh) = compute_scale(w, h, USABLE_W, USABLE_H, false);
        prop_assert!(nw <= USABLE_W * 1.0001);
        prop_assert!(nh <= USABLE_H * 1.0001);
        prop_assert!(close(nw / nh, w / h));
    }

    #[test]
    fn fit_fills_one_axis(w in 0.1f32..190.0, h in 0.1f32..277.0) {
        let (nw, nh) = compute_scale(w, h, USABLE_W, USABLE_H, true);
        prop_assert!(close(nw, USABLE_W) || close(nh, USABLE_H));
        prop_assert!(nw <= USABLE_W * 1.0001 && nh <= USABLE_H * 1.0001);
        prop_assert!(close(nw / nh, w / h));
    }

    #[test]
    fn center_is_half_the_slack(w in 0.0f32..190.0, h in 0.0f32..277.0) {
        prop_assert_eq!(
            compute_position_str("center", USABLE_W, USABLE_H, w, h),
            ((USABLE_W - w) / 2.0, (USABLE_H - h) / 2.0)
        );
    }

    #[test]
    fn left_and_right_edges(w in 0.0f32..190.0, h in 0.0f32..277.0) {
        for token in ["top-left", "left", "center-left", "bottom-left"] {
            prop_assert_eq!(compute_position_str(token, USABLE_W, USABLE_H, w, h).0, 0.0);
        }
        for token in ["top-right", "right", "center-right", "bottom-right"] {
            prop_assert_eq!(compute_position_str(token, USABLE_W, USABLE_H, w, h).0, USABLE_W - w);
        }
    }

    #[test]
    fn unknown_tokens_center(token in "[a-z]{0,12}", w in 0.0f32..190.0, h in 0.0f32..277.0) {
        let known = Anchor::ALL.iter().any(|a| a.as_str() == token)
            || ["top", "bottom", "left", "right", "center-center"].contains(&token.as_str());
        prop_assume!(!known);
        prop_assert_eq!(
            compute_position_str(&token, USABLE_W, USABLE_H, w, h),
            compute_position_str("", USABLE_W, USABLE_H, w, h)
        );
    }
}
