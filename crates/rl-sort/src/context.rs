//! The runtime-swappable sort context.

use std::sync::Arc;

use rl_core::StrategyHandle;

use crate::algorithms::SortStrategy;

/// Delegates sorting to whichever [`SortStrategy`] is currently bound.
///
/// The context performs no sorting logic of its own.  Each call to
/// [`sort`][Self::sort] snapshots the bound strategy first, so a concurrent
/// [`set_strategy`][Self::set_strategy] never switches an algorithm
/// mid-call; it takes effect for the next call.
#[derive(Debug)]
pub struct SortContext<T> {
    strategy: StrategyHandle<dyn SortStrategy<T>>,
}

impl<T> SortContext<T> {
    /// Create a context bound to `strategy`.
    pub fn new(strategy: Arc<dyn SortStrategy<T>>) -> Self {
        Self {
            strategy: StrategyHandle::new(strategy),
        }
    }

    /// Replace the bound strategy; takes effect for the next sort.
    pub fn set_strategy(&self, strategy: Arc<dyn SortStrategy<T>>) {
        self.strategy.relink(strategy);
    }

    /// Sort `data` with the currently bound strategy.
    pub fn sort(&self, data: &mut [T]) {
        let strategy = self.strategy.current();
        strategy.sort(data);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;
    use std::sync::Mutex;
    use std::thread;

    use crate::algorithms::{BubbleSort, MergeSort, QuickSort};

    #[test]
    fn delegates_to_the_bound_strategy() {
        let context = SortContext::new(Arc::new(BubbleSort));
        let mut data = vec![100, 21, 23, 32, 4, 88, 66];
        context.sort(&mut data);
        assert_eq!(data, vec![4, 21, 23, 32, 66, 88, 100]);

        context.set_strategy(Arc::new(MergeSort));
        let mut data = vec![3, 1, 2];
        context.sort(&mut data);
        assert_eq!(data, vec![1, 2, 3]);
    }

    /// Sort strategy that parks inside `sort` until released, then records
    /// its label.  Lets the test freeze an execute call mid-flight.
    #[derive(Debug)]
    struct Parking {
        label: &'static str,
        entered: mpsc::Sender<()>,
        release: Mutex<mpsc::Receiver<()>>,
        log: Arc<Mutex<Vec<&'static str>>>,
    }

    impl SortStrategy<i32> for Parking {
        fn sort(&self, data: &mut [i32]) {
            self.entered.send(()).unwrap();
            self.release.lock().unwrap().recv().unwrap();
            data.sort();
            self.log.lock().unwrap().push(self.label);
        }
    }

    #[test]
    fn a_swap_does_not_affect_a_sort_already_in_flight() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let (entered_tx, entered_rx) = mpsc::channel();
        let (release_tx, release_rx) = mpsc::channel();

        let slow = Arc::new(Parking {
            label: "first",
            entered: entered_tx,
            release: Mutex::new(release_rx),
            log: log.clone(),
        });

        let context: Arc<SortContext<i32>> = Arc::new(SortContext::new(slow));

        let sorter = {
            let context = context.clone();
            thread::spawn(move || {
                let mut data = vec![3, 1, 2];
                context.sort(&mut data);
                data
            })
        };

        // Wait until the sort is in flight, then swap the strategy.
        entered_rx.recv().unwrap();
        context.set_strategy(Arc::new(QuickSort));
        release_tx.send(()).unwrap();

        assert_eq!(sorter.join().unwrap(), vec![1, 2, 3]);
        // The in-flight call ran to completion on the original strategy.
        assert_eq!(*log.lock().unwrap(), vec!["first"]);

        // The next call uses the new strategy exclusively; the parking
        // strategy would otherwise block forever waiting for a release.
        let mut data = vec![9, 8, 7];
        context.sort(&mut data);
        assert_eq!(data, vec![7, 8, 9]);
    }
}
