use serde::{Serialize, Deserialize};

use crate::common::{checker, utils};


/// Per-member class-probability predictions on a set of
/// unlabeled observations,
/// stored member-major: `members[c][u][k]` is the probability
/// member `c` assigns to class `k` for observation `u`.
///
/// Every row is a distribution over the same canonical class list,
/// so members that predict different class orders must be
/// reconciled **before** construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommitteePredictions {
    members: Vec<Vec<Vec<f64>>>,
    n_classes: usize,
}


impl CommitteePredictions {
    /// Construct from per-member probability matrices.
    ///
    /// Panics when the members disagree on the number of
    /// observations, when some row is not a length-`n_classes`
    /// probability vector, or when `members` is empty.
    pub fn from_probabilities(
        members: Vec<Vec<Vec<f64>>>,
        n_classes: usize,
    ) -> Self
    {
        assert!(!members.is_empty(), "a committee has at least one member");

        let n_observation = members[0].len();
        for member in &members {
            assert_eq!(
                member.len(), n_observation,
                "every member must predict the same observations"
            );
            for row in member {
                assert_eq!(row.len(), n_classes);
                checker::check_probability_simplex(row);
            }
        }

        Self { members, n_classes }
    }


    /// Construct from per-member hard votes.
    /// `votes[c][u]` is the class index member `c` voted for
    /// observation `u`.
    /// Each vote degenerates to a one-hot probability vector.
    pub fn from_votes(votes: Vec<Vec<usize>>, n_classes: usize) -> Self {
        let members = votes.into_iter()
            .map(|member| {
                member.into_iter()
                    .map(|k| {
                        assert!(k < n_classes);
                        let mut row = vec![0f64; n_classes];
                        row[k] = 1f64;
                        row
                    })
                    .collect::<Vec<_>>()
            })
            .collect::<Vec<_>>();

        Self::from_probabilities(members, n_classes)
    }


    /// Number of committee members.
    pub fn n_members(&self) -> usize {
        self.members.len()
    }


    /// Number of scored observations.
    pub fn n_observations(&self) -> usize {
        self.members[0].len()
    }


    /// Number of classes.
    pub fn n_classes(&self) -> usize {
        self.n_classes
    }


    /// The member-major probability tensor.
    pub fn members(&self) -> &[Vec<Vec<f64>>] {
        &self.members[..]
    }


    /// The consensus (mean) distribution of observation `u`.
    pub(crate) fn consensus(&self, u: usize) -> Vec<f64> {
        let c = self.n_members() as f64;
        let mut mean = vec![0f64; self.n_classes];
        for member in &self.members {
            for (m, &p) in mean.iter_mut().zip(&member[u]) {
                *m += p;
            }
        }
        mean.iter_mut().for_each(|m| { *m /= c; });
        mean
    }


    /// Each member's hard vote (argmax class index) for
    /// observation `u`.
    pub(crate) fn votes(&self, u: usize) -> Vec<usize> {
        self.members.iter()
            .map(|member| utils::argmax(&member[u]))
            .collect::<Vec<_>>()
    }
}
