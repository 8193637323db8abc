use crate::slot::SlotStyle;
use crate::Carousel;

/// Easing function type: takes progress (0.0 to 1.0) and returns eased value (0.0 to 1.0)
pub type EasingFn = fn(f32) -> f32;

/// Linear interpolation (no easing)
pub fn linear(t: f32) -> f32 {
    t
}

/// Ease in-out (cubic) - slow start and end, fast middle
pub fn ease_in_out_cubic(t: f32) -> f32 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        let t = t - 1.0;
        1.0 + 4.0 * t * t * t
    }
}

/// Linearly interpolate between two f32 values
pub fn lerp_f32(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Interpolate between two slot styles.
///
/// A card stays visible while it is moving into or out of view.
pub fn lerp_slot_style(from: &SlotStyle, to: &SlotStyle, t: f32) -> SlotStyle {
    SlotStyle {
        offset_x: lerp_f32(from.offset_x, to.offset_x, t),
        scale: lerp_f32(from.scale, to.scale, t),
        opacity: lerp_f32(from.opacity, to.opacity, t),
        rotation_y: lerp_f32(from.rotation_y, to.rotation_y, t),
        visible: from.visible || to.visible,
    }
}

/// Transition configuration
#[derive(Debug, Clone, Copy)]
pub struct Transition {
    /// Duration in seconds
    pub duration: f32,
    pub easing: EasingFn,
}

impl Transition {
    pub fn new(duration: f32, easing: EasingFn) -> Self {
        Self { duration, easing }
    }

    /// Slide between slots (350ms, cubic ease-in-out)
    pub fn standard() -> Self {
        Self {
            duration: 0.35,
            easing: ease_in_out_cubic,
        }
    }

    /// Eased progress after `elapsed` seconds, 1.0 once finished
    pub fn progress(&self, elapsed: f32) -> f32 {
        if self.duration <= 0.0 || elapsed >= self.duration {
            return 1.0;
        }
        (self.easing)((elapsed / self.duration).clamp(0.0, 1.0))
    }
}

impl Default for Transition {
    fn default() -> Self {
        Self::standard()
    }
}

#[derive(Debug, Clone, Copy)]
struct Tween {
    from: SlotStyle,
    to: SlotStyle,
    elapsed: f32,
}

impl Tween {
    fn settled(style: SlotStyle) -> Self {
        Self {
            from: style,
            to: style,
            elapsed: f32::INFINITY,
        }
    }

    fn current(&self, transition: &Transition) -> SlotStyle {
        let t = transition.progress(self.elapsed);
        if t >= 1.0 {
            self.to
        } else {
            lerp_slot_style(&self.from, &self.to, t)
        }
    }
}

/// Per-card style animation following a [`Carousel`]
///
/// The carousel only knows target slots; this keeps, for every card, where it
/// is coming from and how far along it is. Retargeting mid-flight starts the
/// new tween from the card's current interpolated style.
#[derive(Debug, Clone)]
pub struct SlotAnimator {
    transition: Transition,
    tweens: Vec<Tween>,
}

impl SlotAnimator {
    /// Animator with every card already resting in its current slot
    pub fn new(carousel: &Carousel, transition: Transition) -> Self {
        let tweens = carousel
            .slots()
            .map(|(_, slot)| Tween::settled(slot.target_style()))
            .collect();
        Self { transition, tweens }
    }

    /// Pick up slot changes after `next`/`prev`
    pub fn sync(&mut self, carousel: &Carousel) {
        for (index, slot) in carousel.slots() {
            self.retarget(index, slot.target_style());
        }
    }

    fn retarget(&mut self, index: usize, target: SlotStyle) {
        let transition = self.transition;
        let Some(tween) = self.tweens.get_mut(index) else {
            return;
        };
        if tween.to == target {
            return;
        }
        *tween = Tween {
            from: tween.current(&transition),
            to: target,
            elapsed: 0.0,
        };
    }

    /// Advance all tweens by `dt` seconds
    pub fn advance(&mut self, dt: f32) {
        let dt = dt.max(0.0);
        for tween in &mut self.tweens {
            tween.elapsed += dt;
        }
    }

    /// Current style of card `index`; hidden-at-rest for unknown indices
    pub fn style(&self, index: usize) -> SlotStyle {
        self.tweens
            .get(index)
            .map(|tween| tween.current(&self.transition))
            .unwrap_or(crate::Slot::Hidden.target_style())
    }

    pub fn is_animating(&self) -> bool {
        self.tweens
            .iter()
            .any(|tween| self.transition.progress(tween.elapsed) < 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Product, Slot};

    fn carousel(len: usize) -> Carousel {
        Carousel::new((0..len).map(|i| Product::new(format!("P{i}"), "2025")).collect()).unwrap()
    }

    #[test]
    fn test_ease_in_out_cubic() {
        assert_eq!(ease_in_out_cubic(0.0), 0.0);
        assert_eq!(ease_in_out_cubic(0.5), 0.5);
        assert_eq!(ease_in_out_cubic(1.0), 1.0);
        assert!(ease_in_out_cubic(0.25) < 0.25);
    }

    #[test]
    fn test_lerp_f32() {
        assert_eq!(lerp_f32(0.0, 100.0, 0.0), 0.0);
        assert_eq!(lerp_f32(0.0, 100.0, 0.5), 50.0);
        assert_eq!(lerp_f32(0.0, 100.0, 1.0), 100.0);
    }

    #[test]
    fn test_progress() {
        let transition = Transition::new(1.0, linear);
        assert_eq!(transition.progress(0.0), 0.0);
        assert_eq!(transition.progress(0.5), 0.5);
        assert_eq!(transition.progress(2.0), 1.0);
        assert_eq!(Transition::new(0.0, linear).progress(0.0), 1.0);
    }

    #[test]
    fn test_starts_settled() {
        let c = carousel(4);
        let animator = SlotAnimator::new(&c, Transition::standard());

        assert!(!animator.is_animating());
        for (index, slot) in c.slots() {
            assert_eq!(animator.style(index), slot.target_style());
        }
    }

    #[test]
    fn test_reaches_terminal_state() {
        let mut c = carousel(4);
        let mut animator = SlotAnimator::new(&c, Transition::standard());

        c.next();
        animator.sync(&c);
        assert!(animator.is_animating());

        animator.advance(0.1);
        let midway = animator.style(1);
        assert!(midway.scale < 1.0 && midway.scale > Slot::Right.target_style().scale);

        animator.advance(1.0);
        assert!(!animator.is_animating());
        for (index, slot) in c.slots() {
            assert_eq!(animator.style(index), slot.target_style());
        }
    }

    #[test]
    fn test_leaving_card_stays_visible_until_done() {
        let mut c = carousel(4);
        let mut animator = SlotAnimator::new(&c, Transition::standard());

        // Item 3 goes from Left to Hidden
        c.next();
        animator.sync(&c);
        animator.advance(0.1);
        assert!(animator.style(3).visible);

        animator.advance(1.0);
        assert!(!animator.style(3).visible);
    }

    #[test]
    fn test_retarget_mid_flight_starts_from_current() {
        let mut c = carousel(3);
        let mut animator = SlotAnimator::new(&c, Transition::new(1.0, linear));

        c.next();
        animator.sync(&c);
        animator.advance(0.5);
        let before = animator.style(0);

        c.prev();
        animator.sync(&c);
        assert_eq!(animator.style(0), before);
    }
}
