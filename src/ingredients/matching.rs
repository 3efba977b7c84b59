//! Multiset matching with wildcard substitution.
//!
//! Every "do I have the ingredients for X" question in the game goes through
//! `Matcher`: baking a layer, fulfilling an order and garnishing it.
//!
//! ## Algorithm
//!
//! A `Matcher` tracks which units of the available multiset are already
//! claimed. `claim` satisfies a list of requirements in two passes:
//!
//! 1. Each requirement claims an unclaimed identical unit.
//! 2. Each requirement still unmet claims an unclaimed wildcard, but only if
//!    the requirement is not composite.
//!
//! Exact matches go first so that a wildcard is only spent where nothing else
//! fits. A claim is all-or-nothing: on failure the matcher is unchanged.
//! Claims stack, so a garnish can be matched against what a recipe left over.

use smallvec::SmallVec;

use super::ingredient::Ingredient;

/// Indices into the available multiset, one per requirement, in
/// requirement order.
pub type Claim = SmallVec<[usize; 8]>;

/// Claims units of an available multiset against requirement lists.
#[derive(Debug)]
pub struct Matcher<'a> {
    available: &'a [Ingredient],
    taken: SmallVec<[bool; 16]>,
}

impl<'a> Matcher<'a> {
    #[must_use]
    pub fn new(available: &'a [Ingredient]) -> Self {
        Self {
            available,
            taken: SmallVec::from_elem(false, available.len()),
        }
    }

    /// Claim one unit for every requirement.
    ///
    /// Returns the claimed indices, or the number of requirements that could
    /// be met if not all of them can.
    pub fn claim(&mut self, required: &[Ingredient]) -> Result<Claim, usize> {
        let mut taken = self.taken.clone();
        let mut claim: SmallVec<[Option<usize>; 8]> = SmallVec::from_elem(None, required.len());

        for (slot, need) in claim.iter_mut().zip(required) {
            *slot = self.find(&taken, |have| have == need);
            if let Some(i) = *slot {
                taken[i] = true;
            }
        }

        let mut met = required.len();
        for (slot, need) in claim.iter_mut().zip(required) {
            if slot.is_some() {
                continue;
            }
            if !need.is_composite() {
                *slot = self.find(&taken, Ingredient::is_wildcard);
            }
            match *slot {
                Some(i) => taken[i] = true,
                None => met -= 1,
            }
        }

        if met < required.len() {
            return Err(met);
        }

        self.taken = taken;
        Ok(claim.into_iter().flatten().collect())
    }

    /// Number of units not yet claimed.
    #[must_use]
    pub fn unclaimed(&self) -> usize {
        self.taken.iter().filter(|&&t| !t).count()
    }

    fn find(&self, taken: &[bool], pred: impl Fn(&Ingredient) -> bool) -> Option<usize> {
        self.available
            .iter()
            .enumerate()
            .position(|(i, have)| !taken[i] && pred(have))
    }
}

/// Remove the claimed units from `source`, returning them in claim order.
pub(crate) fn extract(source: &mut Vec<Ingredient>, claim: &[usize]) -> Vec<Ingredient> {
    let removed: Vec<Ingredient> = claim.iter().map(|&i| source[i].clone()).collect();

    let mut order: SmallVec<[usize; 8]> = SmallVec::from_slice(claim);
    order.sort_unstable_by(|a, b| b.cmp(a));
    for i in order {
        source.remove(i);
    }

    removed
}
