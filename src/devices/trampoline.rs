//! Fatal fault trampoline.
//!
//! The nano-kernel calls [`FaultTrampoline::on_assert`] when one of its
//! internal contracts is broken. There is nothing to recover: the
//! trampoline masks interrupts, leaves a fatal record with the logger
//! and parks the core until reset.
use super::state::StateToken;
use crate::hal::{
    idle::Park,
    interrupts::InterruptControl,
    log::{Logger, Severity},
};

/// Message attached to the first fatal record.
pub const ASSERTION_FAILED: &str = "assertion failed";
/// Message attached to records from a fault raised while already halted.
pub const REPEATED_ASSERTION: &str = "assertion failed while halted";

pub struct FaultTrampoline<I, L, P>
where
    I: InterruptControl,
    L: Logger,
    P: Park,
{
    interrupts: I,
    logger: L,
    park: P,
    state: &'static StateToken,
}

impl<I, L, P> FaultTrampoline<I, L, P>
where
    I: InterruptControl,
    L: Logger,
    P: Park,
{
    pub fn new(interrupts: I, logger: L, park: P, state: &'static StateToken) -> Self {
        Self { interrupts, logger, park, state }
    }

    /// Terminal reaction to a failed kernel assertion. Never returns.
    ///
    /// A second fault while halted (from a handler that was already
    /// running, for instance) takes the same path: it is logged again
    /// and the system stays halted.
    pub fn on_assert(&mut self, module: &str, location: i32) -> ! {
        let format =
            if self.state.halt(&mut self.interrupts) { ASSERTION_FAILED } else { REPEATED_ASSERTION };
        self.logger.log(Severity::Fatal, format, module, location);
        self.park.park()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{
        devices::state::SystemState,
        hal::doubles::{
            idle::{PanickingPark, PARKED},
            interrupts::FakeInterrupts,
            journal::{Event, Journal},
            log::RecordingLogger,
        },
    };
    use std::panic::{catch_unwind, AssertUnwindSafe};

    type Trampoline = FaultTrampoline<FakeInterrupts, RecordingLogger, PanickingPark>;

    fn leaked_token() -> &'static StateToken { Box::leak(Box::new(StateToken::new())) }

    fn trampoline(journal: &Journal, state: &'static StateToken) -> Trampoline {
        FaultTrampoline::new(
            FakeInterrupts::new(journal),
            RecordingLogger::new(journal),
            PanickingPark::new(journal),
            state,
        )
    }

    /// Runs the trampoline and hands back the parking panic's message.
    fn fault(trampoline: &mut Trampoline, module: &str, location: i32) -> String {
        let outcome = catch_unwind(AssertUnwindSafe(|| trampoline.on_assert(module, location)));
        let payload = match outcome {
            Ok(_) => panic!("trampoline returned to its caller"),
            Err(payload) => payload,
        };
        payload.downcast_ref::<String>().cloned().unwrap_or_default()
    }

    #[test]
    #[should_panic(expected = "core parked")]
    fn trampoline_never_returns_to_its_caller() {
        let journal = Journal::default();
        trampoline(&journal, leaked_token()).on_assert("qf_act", 42);
    }

    #[test]
    fn interrupts_are_masked_before_logging_and_parking() {
        // Given
        let journal = Journal::default();
        let state = leaked_token();
        let mut trampoline = trampoline(&journal, state);

        // When
        let message = fault(&mut trampoline, "qep_hsm", 117);

        // Then
        assert_eq!(message, PARKED);
        assert!(!trampoline.interrupts.enabled());
        assert_eq!(
            journal.events(),
            vec![
                Event::InterruptsDisabled,
                Event::Logged {
                    severity: Severity::Fatal,
                    format: ASSERTION_FAILED,
                    module: "qep_hsm".into(),
                    location: 117,
                },
                Event::Parked,
            ]
        );
    }

    #[test]
    fn system_is_halted_after_a_fault_and_stays_halted() {
        // Given
        let journal = Journal::default();
        let state = leaked_token();
        let mut trampoline = trampoline(&journal, state);
        assert_eq!(state.state(), SystemState::Running);

        // When
        fault(&mut trampoline, "qf_time", 0);

        // Then
        for _ in 0..3 {
            assert_eq!(state.state(), SystemState::Halted);
        }
    }

    #[test]
    fn repeated_faults_log_again_and_remain_halted() {
        // Given
        let journal = Journal::default();
        let state = leaked_token();
        let mut trampoline = trampoline(&journal, state);
        fault(&mut trampoline, "qf_act", 1);

        // When
        let message = fault(&mut trampoline, "qf_act", -7);

        // Then
        assert_eq!(message, PARKED);
        assert_eq!(state.state(), SystemState::Halted);
        let logged: Vec<_> = journal
            .events()
            .into_iter()
            .filter_map(|event| match event {
                Event::Logged { severity, format, location, .. } => Some((severity, format, location)),
                _ => None,
            })
            .collect();
        assert_eq!(
            logged,
            vec![
                (Severity::Fatal, ASSERTION_FAILED, 1),
                (Severity::Fatal, REPEATED_ASSERTION, -7),
            ]
        );
    }

    #[test]
    fn module_and_location_are_passed_verbatim() {
        // Given
        let journal = Journal::default();
        let mut trampoline = trampoline(&journal, leaked_token());
        let module = "ctrl/../weird module ✓";

        // When
        fault(&mut trampoline, module, i32::MIN);

        // Then
        assert!(journal.events().contains(&Event::Logged {
            severity: Severity::Fatal,
            format: ASSERTION_FAILED,
            module: module.into(),
            location: i32::MIN,
        }));
    }
}
