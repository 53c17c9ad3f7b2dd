//! Batch processing of a dataset tree.

use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Instant;

use rayon::prelude::*;

use claro_core::decoders::decode_image;
use claro_core::models::EnhanceOptions;

use crate::processing::{
    collect_split_images, ensure_output_dir, mirrored_output_path, process_single_image,
};

/// What happened to one file during the batch
enum FileOutcome {
    /// Enhanced and written to the output tree
    Processed,
    /// Decode failed; logged and skipped, does not fail the batch
    SkippedDecode,
}

/// Enhance every image under `<input>/{train,test,val}/<class>/` and write
/// the results to the mirrored tree under `out`.
pub fn cmd_process(
    input: PathBuf,
    out: PathBuf,
    threads: Option<usize>,
    silent: bool,
    verbose: bool,
) -> Result<(), String> {
    let batch_start = Instant::now();

    claro_core::config::set_verbose(verbose);

    let images = collect_split_images(&input)?;

    if !silent {
        println!("Found {} image files to process", images.len());
    }

    // Configure thread pool if specified
    if let Some(num_threads) = threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(num_threads)
            .build_global()
            .map_err(|e| format!("Failed to configure thread pool: {}", e))?;
        if !silent {
            println!("Using {} threads for parallel processing", num_threads);
        }
    }

    ensure_output_dir(&out)?;

    // Fixed pipeline parameters, passed explicitly to every invocation
    let options = EnhanceOptions::default();

    // Progress tracking
    let processed_count = AtomicUsize::new(0);
    let total_files = images.len();

    // Process files in parallel; each worker owns its buffers and writes
    // to a distinct mirrored path
    let results: Vec<Result<FileOutcome, String>> = images
        .par_iter()
        .map(|image| {
            let output_path = mirrored_output_path(&out, image);

            let decoded = match decode_image(&image.input_path) {
                Ok(decoded) => decoded,
                Err(e) => {
                    eprintln!(
                        "Failed to load image {}: {}",
                        image.input_path.display(),
                        e
                    );
                    return Ok(FileOutcome::SkippedDecode);
                }
            };

            process_single_image(decoded, &output_path, &options)?;

            let count = processed_count.fetch_add(1, Ordering::SeqCst) + 1;
            if !silent {
                println!(
                    "[{}/{}] {} -> {}",
                    count,
                    total_files,
                    image.input_path.display(),
                    output_path.display()
                );
            }
            Ok(FileOutcome::Processed)
        })
        .collect();

    // Summarize results
    let mut success_count = 0;
    let mut skipped_count = 0;
    let mut errors: Vec<(PathBuf, String)> = Vec::new();

    for (image, result) in images.iter().zip(results) {
        match result {
            Ok(FileOutcome::Processed) => success_count += 1,
            Ok(FileOutcome::SkippedDecode) => skipped_count += 1,
            Err(e) => errors.push((image.input_path.clone(), e)),
        }
    }

    let batch_elapsed = batch_start.elapsed();

    if !silent {
        println!("\n========================================");
        println!("BATCH PROCESSING COMPLETE");
        println!("========================================");
        println!("  Successful: {}", success_count);
        println!("  Skipped:    {}", skipped_count);
        println!("  Failed:     {}", errors.len());
        println!("  Total time: {:.2}s", batch_elapsed.as_secs_f64());

        if !errors.is_empty() {
            println!("\nErrors:");
            for (path, error) in &errors {
                println!("  {}: {}", path.display(), error);
            }
        }
    }

    println!(
        "Processing complete. Enhanced images are in: {}",
        out.display()
    );

    if errors.is_empty() {
        Ok(())
    } else {
        Err(format!("{} files failed to process", errors.len()))
    }
}
