// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Gesture classification with time-based debouncing.
//!
//! Each frame's landmarks are reduced to four finger extension flags and a
//! fist proximity test. The discrete actions (color change, clear) pass
//! through cooldown gates kept in a [`CooldownClock`], so a held gesture
//! does not re-trigger on every camera frame.

use crate::config::{
    CLEAR_COOLDOWN, COLOR_CHANGE_COOLDOWN, EXTENSION_MARGIN, FIST_HOLD, FIST_PROXIMITY,
};
use crate::models::gesture::{Classification, Gesture};
use crate::models::landmark::{
    pip_of, CanvasSize, HandLandmarks, PixelPoint, FINGER_TIPS, THUMB_TIP, WRIST,
};
use crate::util::geometry::{distance, to_pixel};
use std::time::Duration;

/// Progress of the current fist towards a color change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum FistHold {
    #[default]
    Released,
    Holding {
        since: Duration,
    },
    /// Already fired; stays here until the fist opens.
    Spent,
}

/// Debounce timers for the discrete gesture actions.
///
/// Times are offsets from the start of the session.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CooldownClock {
    last_color_change: Option<Duration>,
    last_clear: Option<Duration>,
    fist_hold: FistHold,
}

impl CooldownClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget any fist in progress.
    pub fn release_fist(&mut self) {
        self.fist_hold = FistHold::Released;
    }

    /// Advance the fist hold; returns true when the color should change.
    fn update_fist(&mut self, is_fist: bool, now: Duration) -> bool {
        if !is_fist {
            self.fist_hold = FistHold::Released;
            return false;
        }

        match self.fist_hold {
            FistHold::Released => {
                self.fist_hold = FistHold::Holding { since: now };
                false
            }
            FistHold::Holding { since }
                if now.saturating_sub(since) > FIST_HOLD
                    && elapsed_since(self.last_color_change, now, COLOR_CHANGE_COOLDOWN) =>
            {
                self.last_color_change = Some(now);
                self.fist_hold = FistHold::Spent;
                true
            }
            FistHold::Holding { .. } | FistHold::Spent => false,
        }
    }

    /// Returns true, and starts the cooldown, when a clear is permitted.
    fn try_clear(&mut self, now: Duration) -> bool {
        if elapsed_since(self.last_clear, now, CLEAR_COOLDOWN) {
            self.last_clear = Some(now);
            true
        } else {
            false
        }
    }
}

fn elapsed_since(last: Option<Duration>, now: Duration, cooldown: Duration) -> bool {
    last.map_or(true, |t| now.saturating_sub(t) >= cooldown)
}

/// Classify one frame.
///
/// `hand` is `None` when the model detected no hand. The result depends only
/// on the arguments and the cooldown state.
pub fn classify(
    hand: Option<&HandLandmarks>,
    size: CanvasSize,
    now: Duration,
    clock: &mut CooldownClock,
) -> Classification {
    let Some(hand) = hand else {
        clock.release_fist();
        return Classification::gesture(Gesture::NoHand);
    };

    let wrist = to_pixel(hand.get(WRIST), size);
    let thumb_tip = to_pixel(hand.get(THUMB_TIP), size);
    let tips: [PixelPoint; 4] = FINGER_TIPS.map(|tip| to_pixel(hand.get(tip), size));

    // Image y grows downwards: an extended fingertip sits above its PIP joint.
    let extended: [bool; 4] =
        FINGER_TIPS.map(|tip| hand.get(tip).y < hand.get(pip_of(tip)).y - EXTENSION_MARGIN);

    let fist_radius = FIST_PROXIMITY * size.width as f64;
    let is_fist = tips.iter().all(|&tip| distance(tip, wrist) < fist_radius);
    let cycle_color = clock.update_fist(is_fist, now);

    let is_palm = extended.iter().all(|&e| e);
    let clear = is_palm && clock.try_clear(now);

    let is_pointing = extended[0] && !extended[1] && !extended[2] && !extended[3];

    let gesture = if is_pointing {
        Gesture::Pointing {
            fingertip: tips[0],
            pinch: distance(tips[0], thumb_tip),
        }
    } else if is_palm {
        Gesture::Palm
    } else if is_fist {
        Gesture::Fist
    } else {
        Gesture::Neutral
    };

    Classification {
        gesture,
        cycle_color,
        clear,
    }
}
