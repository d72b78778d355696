//! Tests for progress tracking across batch renders

#[cfg(test)]
mod tests {
    use image2logo::io::configuration::MAX_INDIVIDUAL_PROGRESS_BARS;
    use image2logo::io::progress::{ProgressManager, RenderStage};
    use std::path::Path;
    use std::time::Duration;

    fn walk_stages(pm: &mut ProgressManager, index: usize) {
        for stage in [
            RenderStage::Hashing,
            RenderStage::Composing,
            RenderStage::Exporting,
        ] {
            pm.enter_stage(index, stage);
        }
    }

    // Tests stage ordering and labels
    // Verified by renumbering the stages
    #[test]
    fn test_render_stages() {
        assert_eq!(RenderStage::COUNT, 3);
        assert!(RenderStage::Hashing < RenderStage::Composing);
        assert!(RenderStage::Composing < RenderStage::Exporting);
        assert_eq!(RenderStage::Exporting as u64, RenderStage::COUNT);
        assert_eq!(RenderStage::Composing.label(), "composing");
    }

    // Tests ProgressManager construction and an empty batch
    // Verified by setting wrong initial state
    #[test]
    fn test_progress_manager_new() {
        let mut pm = ProgressManager::new();
        pm.initialize(0);
        pm.finish();

        let mut pm = ProgressManager::default();
        pm.initialize(1);
        pm.start_file(0, Path::new("photo.jpg"));
        walk_stages(&mut pm, 0);
        pm.complete_file(0, Duration::from_millis(12));
        pm.finish();
    }

    // Tests individual progress bars
    // Verified by creating one less progress bar
    #[test]
    fn test_initialize_under_limit() {
        let mut pm = ProgressManager::new();
        let file_count = MAX_INDIVIDUAL_PROGRESS_BARS - 1;
        pm.initialize(file_count);

        for i in 0..file_count {
            pm.start_file(i, Path::new(&format!("photo{i}.jpg")));
            walk_stages(&mut pm, i);
            pm.complete_file(i, Duration::from_millis(10));
        }

        pm.finish();
    }

    // Tests batch progress bar with a rolling window of files
    // Verified by changing batch mode threshold
    #[test]
    fn test_initialize_over_limit() {
        let mut pm = ProgressManager::new();
        let file_count = MAX_INDIVIDUAL_PROGRESS_BARS + 5;
        pm.initialize(file_count);

        for i in 0..file_count {
            pm.start_file(i, Path::new(&format!("photo{i}.jpg")));
            walk_stages(&mut pm, i);
            pm.complete_file(i, Duration::from_millis(10));
        }

        pm.finish();
    }

    // Tests out-of-order and unknown indices are tolerated
    // Verified by breaking the state resize logic
    #[test]
    fn test_out_of_order_indices() {
        let mut pm = ProgressManager::new();
        pm.initialize(3);

        pm.start_file(5, Path::new("late.jpg"));
        pm.enter_stage(5, RenderStage::Composing);
        pm.enter_stage(9, RenderStage::Exporting);
        pm.complete_file(9, Duration::from_millis(1));
        pm.complete_file(5, Duration::from_millis(1));

        pm.finish();
    }
}
