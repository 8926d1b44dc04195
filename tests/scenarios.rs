// Integration tests for the mastermind crate
// These exercise the evaluator, solver and session together

use mastermind::commands::simulate;
use mastermind::core::{Code, Feedback, MastermindError, Palette, enumerate, evaluate};
use mastermind::game::{
    AiCodebreaker, Codebreaker, GameConfig, GameDisplay, GameResult, GameSession, NullDisplay,
    Outcome, Phase, RoundReport, Turn,
};
use mastermind::solver::{OpeningType, Solver, TwoColorSplit};

/// Human stand-in that always plays the same code
struct Stubborn(Code, usize);

impl Codebreaker for Stubborn {
    fn name(&self) -> &str {
        "Stubborn"
    }

    fn next_guess(&mut self, _turn: Turn<'_>) -> anyhow::Result<Code> {
        self.1 += 1;
        Ok(self.0.clone())
    }
}

#[derive(Default)]
struct Transcript {
    feedback: Vec<Feedback>,
    outcome: Option<Outcome>,
}

impl GameDisplay for Transcript {
    fn round_scored(&mut self, report: &RoundReport<'_>) {
        self.feedback.push(report.round.feedback);
    }

    fn finished(&mut self, outcome: &Outcome) {
        self.outcome = Some(outcome.clone());
    }
}

#[test]
fn test_ai_opening_wins_on_first_round() {
    // Default palette, length 4, secret equal to the opening guess
    let config = GameConfig::default();
    let secret = config.palette.parse_code("red red blue blue", 4).unwrap();
    let mut session = GameSession::new(config.clone(), secret).unwrap();
    let mut ai = AiCodebreaker::new(&config, TwoColorSplit).unwrap();
    let mut transcript = Transcript::default();

    let phase = session.play_round(&mut ai, &mut transcript).unwrap();

    assert_eq!(phase, Phase::Victory);
    assert_eq!(transcript.feedback, vec![Feedback::new(4, 4)]);
    let outcome = transcript.outcome.unwrap();
    assert_eq!(outcome.codebreaker, "AI");
    assert_eq!(outcome.rounds, 1);
}

#[test]
fn test_defeat_after_thirteen_rounds() {
    let config = GameConfig::default();
    let secret = config.palette.parse_code("green green green green", 4).unwrap();
    let wrong = config.palette.parse_code("red blue red blue", 4).unwrap();
    let mut session = GameSession::new(config, secret).unwrap();
    let mut breaker = Stubborn(wrong, 0);
    let mut transcript = Transcript::default();

    let outcome = session.run(&mut breaker, &mut transcript).unwrap();

    assert_eq!(outcome.result, GameResult::Defeat);
    assert_eq!(outcome.rounds, 13);
    assert_eq!(breaker.1, 13);
    assert_eq!(transcript.feedback.len(), 13);
    assert!(transcript.feedback.iter().all(|f| *f == Feedback::new(0, 0)));
}

#[test]
fn test_multiset_feedback_example() {
    let palette = Palette::new(["red", "blue"]).unwrap();
    let secret = palette.parse_code("red red blue blue", 4).unwrap();
    let guess = palette.parse_code("red blue red blue", 4).unwrap();

    assert_eq!(evaluate(&guess, &secret).unwrap(), Feedback::new(2, 4));
}

#[test]
fn test_solver_converges_for_every_secret() {
    // Every secret of a 4-color, 3-position game, with candidates never growing
    let palette = Palette::new(["red", "blue", "black", "white"]).unwrap();
    let bound = 4usize.pow(3);

    for secret in enumerate(&palette, 3).unwrap() {
        let mut solver = Solver::new(palette.clone(), 3, OpeningType::Split);
        let mut guess = solver.first_guess().unwrap();
        let mut previous = solver.candidate_count().unwrap();

        while guess != secret {
            let feedback = evaluate(&guess, &secret).unwrap();
            guess = solver.next_guess(feedback, &guess).unwrap();

            let current = solver.candidate_count().unwrap();
            assert!(current <= previous);
            assert!(solver.candidates().unwrap().contains(&secret));
            previous = current;
        }
        assert!(solver.round() <= bound);
    }
}

#[test]
fn test_ai_wins_every_classic_game_within_limit() {
    // The full 6-color, 4-position space against the default 13 guesses
    let config = GameConfig::default();

    for secret in enumerate(&config.palette, 4).unwrap() {
        let mut session = GameSession::new(config.clone(), secret.clone()).unwrap();
        let mut ai = AiCodebreaker::new(&config, OpeningType::Split).unwrap();
        let outcome = session.run(&mut ai, &mut NullDisplay).unwrap();

        assert!(outcome.is_victory(), "lost against {secret}");
    }
}

#[test]
fn test_oversized_ai_game_fails_cleanly() {
    // Twelve positions are fine for humans but too many codes for the AI
    let config = GameConfig::new(Palette::default(), 12, 13).unwrap();
    let secret = config
        .palette
        .parse_code(&["green"; 12].join(" "), 12)
        .unwrap();

    assert!(GameSession::new(config.clone(), secret.clone()).is_ok());
    let err = simulate(&config, secret, OpeningType::Split).unwrap_err();
    assert_eq!(
        err.downcast_ref::<MastermindError>(),
        Some(&MastermindError::CodeSpaceTooLarge {
            colors: 6,
            length: 12
        })
    );
}
