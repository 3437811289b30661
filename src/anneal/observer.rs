//! Progress observation for annealing runs.
//!
//! Observers replace console printing with explicit callbacks. There are
//! two modes:
//!
//! - **periodic** (default): [`AnnealObserver::on_progress`] fires on the
//!   first iteration and then every `log_interval` iterations.
//! - **continuous**: an observer whose
//!   [`observes_every_iteration`](AnnealObserver::observes_every_iteration)
//!   returns `true` gets [`AnnealObserver::on_iteration`] with the current
//!   ordering after every move, e.g. to redraw a route. Periodic progress
//!   is suppressed in this mode.
//!
//! Callbacks run synchronously on the optimizer's thread.

/// Snapshot passed to observers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Progress {
    /// Iterations completed before this snapshot.
    pub iteration: usize,
    pub temperature: f64,
    pub energy: f64,
}

/// Receives lifecycle and progress events from the optimizer.
pub trait AnnealObserver<T> {
    /// Called once before the first iteration.
    fn on_start(&mut self, _ordering: &[T], _energy: f64) {}

    /// Periodic progress; see the module docs.
    fn on_progress(&mut self, _progress: Progress) {}

    /// Whether this observer wants [`on_iteration`](Self::on_iteration)
    /// on every step.
    fn observes_every_iteration(&self) -> bool {
        false
    }

    /// Called after every iteration in continuous mode, with the cooled
    /// temperature and the energy of `ordering`.
    fn on_iteration(&mut self, _ordering: &[T], _progress: Progress) {}

    /// Called once with the final ordering and its recomputed energy.
    fn on_finish(&mut self, _ordering: &[T], _energy: f64) {}
}

impl<T, O: AnnealObserver<T> + ?Sized> AnnealObserver<T> for &mut O {
    fn on_start(&mut self, ordering: &[T], energy: f64) {
        (**self).on_start(ordering, energy)
    }

    fn on_progress(&mut self, progress: Progress) {
        (**self).on_progress(progress)
    }

    fn observes_every_iteration(&self) -> bool {
        (**self).observes_every_iteration()
    }

    fn on_iteration(&mut self, ordering: &[T], progress: Progress) {
        (**self).on_iteration(ordering, progress)
    }

    fn on_finish(&mut self, ordering: &[T], energy: f64) {
        (**self).on_finish(ordering, energy)
    }
}

/// Ignores every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl<T> AnnealObserver<T> for NoopObserver {}

/// Emits progress through `tracing` at INFO level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl<T> AnnealObserver<T> for TracingObserver {
    fn on_progress(&mut self, progress: Progress) {
        tracing::info!(
            iteration = progress.iteration,
            "Temperature: {:.3} Distance: {:.3}",
            progress.temperature,
            progress.energy
        );
    }

    fn on_finish(&mut self, ordering: &[T], energy: f64) {
        tracing::info!(
            items = ordering.len(),
            "Found solution with total distance: {:.3}",
            energy
        );
    }
}

/// Forwards periodic progress to a closure.
pub struct FnObserver<F> {
    f: F,
}

impl<F: FnMut(Progress)> FnObserver<F> {
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<T, F: FnMut(Progress)> AnnealObserver<T> for FnObserver<F> {
    fn on_progress(&mut self, progress: Progress) {
        (self.f)(progress)
    }
}

impl<F> std::fmt::Debug for FnObserver<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("FnObserver")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn emit<O: AnnealObserver<u8>>(mut observer: O) {
        observer.on_start(&[1, 2], 3.0);
        observer.on_progress(Progress {
            iteration: 0,
            temperature: 10.0,
            energy: 3.0,
        });
        observer.on_finish(&[2, 1], 3.0);
    }

    #[test]
    fn test_fn_observer_receives_progress() {
        let mut seen = Vec::new();
        emit(FnObserver::new(|p: Progress| seen.push(p.temperature)));
        assert_eq!(seen, vec![10.0]);
    }

    #[test]
    fn test_mut_ref_forwards() {
        let mut count = 0;
        let mut observer = FnObserver::new(|_| count += 1);
        emit(&mut observer);
        emit(&mut observer);
        drop(observer);
        assert_eq!(count, 2);
    }

    #[test]
    fn test_defaults_are_periodic() {
        assert!(!AnnealObserver::<u8>::observes_every_iteration(&NoopObserver));
        assert!(!AnnealObserver::<u8>::observes_every_iteration(&TracingObserver));
        emit(TracingObserver);
    }
}
