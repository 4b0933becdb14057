//! Daily eco tips
//!
//! Tips rotate by day rather than at random so the "tip of the day" is
//! stable within a day and testable.

use std::time::{SystemTime, UNIX_EPOCH};

const ECO_TIPS: [&str; 15] = [
    "\u{1F4A1} Turn off lights when leaving a room - it saves energy and reduces your carbon footprint!",
    "\u{1F331} Use a reusable water bottle instead of plastic bottles - help reduce ocean pollution!",
    "\u{1F6B6} Walk or bike for short trips - reduce emissions and stay healthy!",
    "\u{267B}\u{FE0F} Separate your recyclables - make sure paper, plastic, and glass go in the right bins!",
    "\u{1F33F} Plant a tree or start a small garden - every plant helps clean the air!",
    "\u{1F4A7} Take shorter showers - save water and energy used for heating!",
    "\u{1F6CD}\u{FE0F} Bring your own shopping bags - reduce plastic waste at stores!",
    "\u{1F31E} Use natural light during the day - open curtains instead of turning on lights!",
    "\u{1F4F1} Unplug electronics when not in use - they still consume energy when plugged in!",
    "\u{1F34E} Eat more plant-based meals - reduce your environmental impact through diet!",
    "\u{1F697} Carpool or use public transport - reduce traffic and emissions!",
    "\u{1F30D} Support local businesses - reduce transportation emissions from shipping!",
    "\u{1F4DA} Borrow books from libraries - reduce paper consumption and save money!",
    "\u{1F50B} Use rechargeable batteries - reduce waste from disposable batteries!",
    "\u{1F30A} Participate in beach cleanups - help protect marine life!",
];

/// Tip for an arbitrary day index (wraps around the pool)
pub fn tip_of_day(day_index: u64) -> &'static str {
    ECO_TIPS[(day_index % ECO_TIPS.len() as u64) as usize]
}

/// Today's tip, keyed on days since the Unix epoch
pub fn daily_tip() -> &'static str {
    let days = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() / 86_400)
        .unwrap_or(0);
    tip_of_day(days)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tips_cycle_through_the_pool() {
        assert_eq!(tip_of_day(0), tip_of_day(15));
        assert_ne!(tip_of_day(0), tip_of_day(1));
    }

    #[test]
    fn every_tip_is_nonempty() {
        for day in 0..15 {
            assert!(!tip_of_day(day).is_empty());
        }
    }

    #[test]
    fn daily_tip_comes_from_the_pool() {
        assert!(ECO_TIPS.contains(&daily_tip()));
    }
}
