use sha2::{Digest, Sha256};

use crate::eval::Score;
use crate::state::PlayerId;

/// Position of one player in the turn's rankings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ranking {
    /// 1-based.
    pub rank: usize,
    pub player: PlayerId,
    pub total: i64,
}

/// Scores of every player for one turn, in ascending player order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoreSheet {
    pub year: u16,
    pub scores: Vec<Score>,
}

impl ScoreSheet {
    pub fn new(year: u16, mut scores: Vec<Score>) -> Self {
        scores.sort_by_key(|score| score.player);
        Self { year, scores }
    }

    pub fn get(&self, player: PlayerId) -> Option<&Score> {
        self.scores.iter().find(|score| score.player == player)
    }

    /// Orders players by wide total, highest first; ties go to the lower player id.
    pub fn rankings(&self) -> Vec<Ranking> {
        let mut order: Vec<&Score> = self.scores.iter().collect();
        order.sort_by(|a, b| b.total.cmp(&a.total).then(a.player.cmp(&b.player)));
        order
            .into_iter()
            .enumerate()
            .map(|(i, score)| Ranking {
                rank: i + 1,
                player: score.player,
                total: score.total,
            })
            .collect()
    }

    /// SHA-256 over the legacy records in player order.
    ///
    /// Two clients that evaluated the same turn produce the same digest.
    pub fn digest(&self) -> [u8; 32] {
        let mut hasher = Sha256::new();
        for score in &self.scores {
            hasher.update(score.to_record().to_bytes());
        }
        hasher.finalize().into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(player: u8, total: i64) -> Score {
        Score {
            player: PlayerId(player),
            total,
            ..Score::default()
        }
    }

    #[test]
    fn rankings_break_ties_by_player() {
        let sheet = ScoreSheet::new(2410, vec![score(2, 50), score(0, 80), score(1, 50)]);
        let order: Vec<(usize, u8)> = sheet
            .rankings()
            .iter()
            .map(|r| (r.rank, r.player.0))
            .collect();
        assert_eq!(order, vec![(1, 0), (2, 1), (3, 2)]);
        assert_eq!(sheet.scores[0].player, PlayerId(0));
    }

    #[test]
    fn digest_depends_on_records_only() {
        let a = ScoreSheet::new(2410, vec![score(0, 10), score(1, 20)]);
        let b = ScoreSheet::new(2411, vec![score(1, 20), score(0, 10)]);
        assert_eq!(a.digest(), b.digest());

        let c = ScoreSheet::new(2410, vec![score(0, 11), score(1, 20)]);
        assert_ne!(a.digest(), c.digest());
    }

    #[test]
    fn empty_sheet_digest_is_sha256_of_nothing() {
        assert_eq!(
            hex::encode(ScoreSheet::default().digest()),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }
}
