use crate::record::Round;
pub use accuracy::{Accuracy, AccuracyHandler};
pub use damage::{DamageHandler, DamageStats};
pub use kast::{Kast, KastHandler};
pub use kda::{Kda, KdaHandler};

mod accuracy;
mod damage;
mod kast;
mod kda;

/// Collects one group of statistics for a single player, one round at a time
pub trait RoundHandler: Default {
    type Output;

    fn handle(&mut self, player: &str, round: &Round);

    /// `rounds` is the number of rounds that were handled
    fn finish(self, rounds: usize) -> Self::Output;
}

#[derive(Default)]
pub struct HandlerStack<Head, Tail> {
    head: Head,
    tail: Tail,
}

impl<Head: RoundHandler, Tail: RoundHandler> RoundHandler for HandlerStack<Head, Tail> {
    type Output = (Head::Output, Tail::Output);

    fn handle(&mut self, player: &str, round: &Round) {
        self.head.handle(player, round);
        self.tail.handle(player, round);
    }

    fn finish(self, rounds: usize) -> Self::Output {
        (self.head.finish(rounds), self.tail.finish(rounds))
    }
}

/// Feed all rounds to a handler
pub fn run<Handler, R>(player: &str, rounds: &[R]) -> Handler::Output
where
    Handler: RoundHandler,
    R: AsRef<Round>,
{
    let mut handler = Handler::default();
    for round in rounds {
        handler.handle(player, round.as_ref());
    }
    handler.finish(rounds.len())
}

/// `part / whole * 100`, or 0 if there is no whole
pub(crate) fn percentage(part: f64, whole: f64) -> f64 {
    if whole > 0.0 {
        part / whole * 100.0
    } else {
        0.0
    }
}

#[test]
fn test_percentage() {
    assert_eq!(40.0, percentage(4.0, 10.0));
    assert_eq!(0.0, percentage(4.0, 0.0));
    assert_eq!(0.0, percentage(0.0, -1.0));
}
