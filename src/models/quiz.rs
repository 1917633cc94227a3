use {
    std::{
        collections::HashSet,
        sync::{Mutex, MutexGuard, LockResult}
    },
    rand::{
        Rng,
        SeedableRng,
        rngs::StdRng,
        seq::SliceRandom
    },
    crate::models::db::{
        QuestionId,
        CategoryId,
        models::Question
    }
};

#[derive(Debug, PartialEq)]
pub enum Pick<'a> {
    Next(&'a Question),
    Exhausted
}

/// Picks a random question of `category` that isn't in `previous`.
pub fn select_next<'a, R: Rng + ?Sized>(
    category: CategoryId,
    previous: &HashSet<QuestionId>,
    pool: &'a [Question],
    rng: &mut R
) -> Pick<'a> {
    pool.iter()
        .filter(|q| q.category_id() == category && !previous.contains(&q.id()))
        .collect::<Vec<_>>()
        .choose(rng)
        .copied()
        .map_or(Pick::Exhausted, Pick::Next)
}

/// One player's progress through a category. The server keeps none of these
/// between requests; the client sends the served ids back each round.
#[derive(Debug, Clone)]
pub struct Round {
    pub category: CategoryId,
    pub previous: HashSet<QuestionId>
}

impl Round {
    pub fn new(category: CategoryId, previous: impl IntoIterator<Item = QuestionId>) -> Round {
        Round {
            category,
            previous: previous.into_iter().collect()
        }
    }

    pub fn select<'a, R: Rng + ?Sized>(&self, pool: &'a [Question], rng: &mut R) -> Pick<'a> {
        select_next(self.category, &self.previous, pool, rng)
    }
}

/// Shared source of randomness for quiz rounds.
#[derive(Debug)]
pub struct Dice(Mutex<StdRng>);

impl Dice {
    pub fn new(seed: Option<u64>) -> Dice {
        Dice(Mutex::new(
            seed.map_or_else(StdRng::from_entropy, StdRng::seed_from_u64)
        ))
    }

    pub fn lock(&self) -> LockResult<MutexGuard<'_, StdRng>> {
        self.0.lock()
    }
}
