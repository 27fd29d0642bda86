//! Random quiz-question selection
//!
//! Stateless: the exclusion list travels with the client, so each call is
//! an independent draw over whatever remains of the candidate pool.

use rand::seq::IteratorRandom;

use crate::db::repos::Question;

/// Pick one uniformly random question from `pool`, skipping ids in
/// `previous`.
///
/// Returns `None` when every candidate has been seen, which is the normal
/// end of a quiz session rather than an error.
pub fn pick_question(pool: Vec<Question>, previous: &[i64]) -> Option<Question> {
    let mut rng = rand::thread_rng();
    pool.into_iter()
        .filter(|question| !previous.contains(&question.id))
        .choose(&mut rng)
}
