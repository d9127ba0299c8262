// =============================================================================
// Interchangeable sort algorithms
// =============================================================================

pub trait SortStrategy {
    fn name(&self) -> &'static str;
    fn sort(&self, data: &[i32]) -> Vec<i32>;
}

pub struct BubbleSort;

impl SortStrategy for BubbleSort {
    fn name(&self) -> &'static str {
        "bubble sort"
    }

    fn sort(&self, data: &[i32]) -> Vec<i32> {
        let mut data = data.to_vec();
        let n = data.len();
        for i in 0..n.saturating_sub(1) {
            for j in 0..n - i - 1 {
                if data[j] > data[j + 1] {
                    data.swap(j, j + 1);
                }
            }
        }
        data
    }
}

pub struct QuickSort;

impl SortStrategy for QuickSort {
    fn name(&self) -> &'static str {
        "quick sort"
    }

    fn sort(&self, data: &[i32]) -> Vec<i32> {
        if data.len() <= 1 {
            return data.to_vec();
        }
        let pivot = data[0];
        let left: Vec<i32> = data[1..].iter().copied().filter(|&x| x < pivot).collect();
        let right: Vec<i32> = data[1..].iter().copied().filter(|&x| x >= pivot).collect();

        let mut sorted = self.sort(&left);
        sorted.push(pivot);
        sorted.extend(self.sort(&right));
        sorted
    }
}

// =============================================================================
// Context: the algorithm can be swapped at runtime
// =============================================================================

pub struct SortContext {
    strategy: Box<dyn SortStrategy>,
}

impl SortContext {
    pub fn new(strategy: Box<dyn SortStrategy>) -> Self {
        Self { strategy }
    }

    pub fn set_strategy(&mut self, strategy: Box<dyn SortStrategy>) {
        self.strategy = strategy;
    }

    pub fn strategy_name(&self) -> &'static str {
        self.strategy.name()
    }

    pub fn execute(&self, data: &[i32]) -> Vec<i32> {
        self.strategy.sort(data)
    }
}

fn main() {
    let numbers = [5, 1, 4, 2, 8, 2];
    let mut context = SortContext::new(Box::new(BubbleSort));

    println!("=== Same data, two strategies ===");
    println!("input: {numbers:?}");
    println!("{}: {:?}", context.strategy_name(), context.execute(&numbers));

    context.set_strategy(Box::new(QuickSort));
    println!("{}: {:?}", context.strategy_name(), context.execute(&numbers));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bubble_sort_orders_the_data() {
        assert_eq!(BubbleSort.sort(&[5, 1, 4, 2, 8]), vec![1, 2, 4, 5, 8]);
    }

    #[test]
    fn test_quick_sort_orders_the_data() {
        assert_eq!(QuickSort.sort(&[5, 1, 4, 2, 8]), vec![1, 2, 4, 5, 8]);
    }

    #[test]
    fn test_duplicates_survive_both_sorts() {
        let data = [3, 1, 3, 2, 1];
        assert_eq!(BubbleSort.sort(&data), vec![1, 1, 2, 3, 3]);
        assert_eq!(QuickSort.sort(&data), vec![1, 1, 2, 3, 3]);
    }

    #[test]
    fn test_edge_inputs() {
        assert_eq!(BubbleSort.sort(&[]), Vec::<i32>::new());
        assert_eq!(QuickSort.sort(&[]), Vec::<i32>::new());
        assert_eq!(BubbleSort.sort(&[7]), vec![7]);
        assert_eq!(QuickSort.sort(&[7]), vec![7]);
    }

    #[test]
    fn test_input_is_left_untouched() {
        let data = [2, 1];
        let sorted = QuickSort.sort(&data);
        assert_eq!(data, [2, 1]);
        assert_eq!(sorted, vec![1, 2]);
    }

    #[test]
    fn test_context_swaps_strategies_at_runtime() {
        let mut context = SortContext::new(Box::new(BubbleSort));
        assert_eq!(context.strategy_name(), "bubble sort");
        assert_eq!(context.execute(&[2, 1]), vec![1, 2]);

        context.set_strategy(Box::new(QuickSort));
        assert_eq!(context.strategy_name(), "quick sort");
        assert_eq!(context.execute(&[2, 1]), vec![1, 2]);
    }
}
