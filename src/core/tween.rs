// Small declarative tween engine.
//
// Callers describe where a value should end up (`animate_to`) and the engine
// moves it there over a fixed duration with an easing curve. Values are
// identified by a caller-chosen key; animating a key that already has a tween
// in flight replaces the old tween.

/// Easing curve applied to normalized tween progress.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Ease {
    Linear,
    /// Quadratic ease-in-out (a.k.a. `power2.inOut`).
    Power2InOut,
}

impl Ease {
    /// Map progress `t` in \[0, 1\] to eased progress in \[0, 1\].
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Ease::Linear => t,
            Ease::Power2InOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    let u = -2.0 * t + 2.0;
                    1.0 - u * u / 2.0
                }
            }
        }
    }
}

#[derive(Clone, Debug)]
struct Tween<K> {
    key: K,
    from: f32,
    to: f32,
    duration: f32,
    elapsed: f32,
    ease: Ease,
}

impl<K> Tween<K> {
    fn value(&self) -> f32 {
        if self.is_done() {
            return self.to;
        }
        let p = self.ease.apply(self.elapsed / self.duration);
        self.from + (self.to - self.from) * p
    }

    fn is_done(&self) -> bool {
        self.elapsed >= self.duration
    }
}

/// Set of in-flight tweens keyed by `K`.
#[derive(Clone, Debug)]
pub struct TweenEngine<K> {
    tweens: Vec<Tween<K>>,
}

impl<K> Default for TweenEngine<K> {
    fn default() -> Self {
        Self { tweens: Vec::new() }
    }
}

impl<K: Copy + PartialEq> TweenEngine<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start moving `key` from `from` to `to` over `duration` seconds.
    pub fn animate_to(&mut self, key: K, from: f32, to: f32, duration: f32, ease: Ease) {
        let tween = Tween {
            key,
            from,
            to,
            duration: duration.max(0.0),
            elapsed: 0.0,
            ease,
        };
        match self.tweens.iter_mut().find(|t| t.key == key) {
            Some(slot) => *slot = tween,
            None => self.tweens.push(tween),
        }
    }

    /// Advance every tween by `dt` seconds, reporting each key's new value to
    /// `apply`. Returns the keys whose tweens finished during this step; those
    /// tweens are dropped and their last reported value is exactly `to`.
    pub fn advance(&mut self, dt: f32, mut apply: impl FnMut(K, f32)) -> Vec<K> {
        let mut finished = Vec::new();
        for t in &mut self.tweens {
            t.elapsed = (t.elapsed + dt.max(0.0)).min(t.duration);
            apply(t.key, t.value());
            if t.is_done() {
                finished.push(t.key);
            }
        }
        self.tweens.retain(|t| !t.is_done());
        finished
    }

    pub fn is_animating(&self, key: K) -> bool {
        self.tweens.iter().any(|t| t.key == key)
    }

    pub fn is_idle(&self) -> bool {
        self.tweens.is_empty()
    }
}
