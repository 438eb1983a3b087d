pub mod memory_copy;

use crate::error::RepTestError;
use memory_copy::{CopyStrategy, MemoryCopy};

/// Built-in memory copy workloads over a buffer of `buffer_size` bytes.
///
/// An empty `names` list selects every workload. Unknown names are rejected
/// before anything is measured.
pub fn select(buffer_size: usize, names: &[String]) -> Result<Vec<MemoryCopy>, RepTestError> {
    if names.is_empty() {
        return Ok(CopyStrategy::ALL
            .iter()
            .map(|strategy| MemoryCopy::new(*strategy, buffer_size))
            .collect());
    }

    names
        .iter()
        .map(|name| {
            CopyStrategy::ALL
                .iter()
                .find(|strategy| strategy.to_string() == name.trim())
                .map(|strategy| MemoryCopy::new(*strategy, buffer_size))
                .ok_or_else(|| RepTestError::UnknownWorkload(name.clone()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_select_all_workloads_by_default() {
        let workloads = select(64, &[]).unwrap();
        let names: Vec<String> = workloads.iter().map(|w| w.name()).collect();
        assert_eq!(
            names,
            vec!["copy_from_slice", "byte_loop", "iter_zip", "vec_clone"]
        );
    }

    #[test]
    fn should_select_named_workloads_in_given_order() {
        let names = vec!["vec_clone".to_owned(), "byte_loop".to_owned()];
        let workloads = select(64, &names).unwrap();
        let selected: Vec<String> = workloads.iter().map(|w| w.name()).collect();
        assert_eq!(selected, names);
    }

    #[test]
    fn should_reject_unknown_workload() {
        let names = vec!["memmove".to_owned()];
        let result = select(64, &names);
        assert!(matches!(result, Err(RepTestError::UnknownWorkload(name)) if name == "memmove"));
    }
}
