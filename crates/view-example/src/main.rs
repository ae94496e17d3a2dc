use anyhow::bail;
use seq_slice::SliceSpec;
use seq_view::{SequenceView, View};
use std::time::Instant;


fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        bail!("Usage: {} <sequence_length> <chain_depth>", args[0]);
    }

    let length: u64 = args[1].parse()?;
    let depth: usize = args[2].parse()?;

    let start = Instant::now();
    let data: Vec<u64> = (0..length).collect();
    let preparation = start.elapsed();

    // trim one element from each end, then keep every second element of
    // the reversed remainder, `depth` times over
    let mut window = View::new(&data).slice(SliceSpec::full())?;
    for _ in 0..depth {
        window = window
            .slice(SliceSpec::bounds(1, -1))?
            .slice(SliceSpec::stepped(-2))?;
    }
    let slicing = start.elapsed();

    let visible = window.len();
    let sum: u64 = window.iter().sum();
    let scan = start.elapsed();

    let head: Vec<u64> = window.slice(SliceSpec::bounds(None, 5))?.to_vec();
    println!(
        "visible: {} of {}, sum: {}, head: {:?}",
        visible,
        data.len(),
        sum,
        head
    );
    println!(
        "preparation: {} ms, slicing: {} ms, scan: {} ms",
        preparation.as_millis(),
        (slicing - preparation).as_millis(),
        (scan - slicing).as_millis()
    );

    Ok(())
}
