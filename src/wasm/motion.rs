use web_sys::Window;

use crate::motion::{MotionPreference, REDUCED_MOTION_QUERY};

pub fn detect(window: &Window) -> MotionPreference {
    let matches = window
        .match_media(REDUCED_MOTION_QUERY)
        .ok()
        .flatten()
        .map(|query| query.matches())
        .unwrap_or(false);
    MotionPreference::from_query_match(matches)
}
