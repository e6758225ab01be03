use honggfuzz::fuzz;
use wordgrid::{count_occurrences, GridIndex};

fn main() {
    loop {
        fuzz!(|data: &[u8]| {
            let text = String::from_utf8_lossy(data);
            let text: &str = &text;
            let (grid, words) = text.split_once('\0').unwrap_or((text, ""));
            let rows: Vec<&str> = grid.lines().collect();
            let words: Vec<&str> = words.split(',').collect();

            if let Ok(index) = GridIndex::build(&rows) {
                let ranked = index.find_ranked(&words);
                assert!(ranked.len() <= index.config().number_of_results);
                assert!(ranked.windows(2).all(|w| w[0].count >= w[1].count));
            }
            for word in &words {
                let _ = count_occurrences(word, grid);
            }
        });
    }
}
