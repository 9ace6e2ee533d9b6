//! CardAnimated — Thaw Card with a fade-in animation.
//!
//! The animation is `@keyframes card-appear` from `style.css`.
//!
//! # Example
//! ```rust,ignore
//! // Staggered list
//! <CardAnimated delay_ms=0>   // card 1
//! <CardAnimated delay_ms=80>  // card 2
//! <CardAnimated delay_ms=160> // card 3
//! ```

use leptos::prelude::*;
use thaw::Card;

/// Delay of the `index`-th card in a staggered list.
pub fn stagger_delay(index: usize) -> u32 {
    const STEP_MS: u32 = 80;
    const MAX_MS: u32 = 480;
    (index as u32).saturating_mul(STEP_MS).min(MAX_MS)
}

pub fn animation_style(delay_ms: u32, style: &str) -> String {
    if style.is_empty() {
        format!("animation: card-appear 0.28s ease-out {}ms both;", delay_ms)
    } else {
        format!(
            "animation: card-appear 0.28s ease-out {}ms both; {}",
            delay_ms, style
        )
    }
}

/// Thaw [`Card`] with the `card-appear` animation.
#[component]
pub fn CardAnimated(
    /// Animation delay in milliseconds.
    #[prop(optional)]
    delay_ms: u32,
    /// Extra CSS classes.
    #[prop(optional, into)]
    class: String,
    /// Extra inline styles, appended after the animation.
    #[prop(optional, into)]
    style: String,
    children: Children,
) -> impl IntoView {
    view! {
        <Card class=format!("portfolio-card {}", class) attr:style=animation_style(delay_ms, &style)>
            {children()}
        </Card>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stagger_delay() {
        assert_eq!(stagger_delay(0), 0);
        assert_eq!(stagger_delay(2), 160);
        assert_eq!(stagger_delay(100), 480);
    }

    #[test]
    fn test_animation_style() {
        assert_eq!(
            animation_style(80, ""),
            "animation: card-appear 0.28s ease-out 80ms both;"
        );
        assert_eq!(
            animation_style(0, "padding: 0;"),
            "animation: card-appear 0.28s ease-out 0ms both; padding: 0;"
        );
    }
}
