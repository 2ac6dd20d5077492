use std::sync::LazyLock;

use chrono::{Duration, NaiveDate, NaiveDateTime};
use rand::{Rng, seq::IndexedRandom};

const PATHS: [(&str, u8); 8] = [
    ("/", 20),
    ("/index.html", 15),
    ("/about.html", 10),
    ("/gallery/summer.jpg", 15),
    ("/gallery/winter.JPG", 5),
    ("/img/banner.PNG", 5),
    ("/img/spinner.gif", 10),
    ("/api/status", 20),
];
const AGENTS: [(&str, u8); 6] = [
    (
        "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:126.0) Gecko/20100101 Firefox/126.0",
        25,
    ),
    (
        "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 Chrome/125.0.0.0 Safari/537.36",
        35,
    ),
    ("Mozilla/4.0 (compatible; Internet Explorer 11.0; Windows NT 6.1)", 5),
    (
        "Mozilla/5.0 (iPhone; CPU iPhone OS 17_5 like Mac OS X) AppleWebKit/605.1.15 Safari/604.1",
        15,
    ),
    // Comma inside the agent exercises the consumer's quote handling.
    ("Opera/9.80 (X11; Linux x86_64, Edition Next) Presto/2.12", 5),
    ("curl/8.7.1", 10),
];
const STATUS: [(u16, u8); 4] = [(200, 70), (304, 10), (404, 15), (500, 5)];

// Fixed base day keeps seeded runs reproducible.
static DAY_START: LazyLock<NaiveDateTime> = LazyLock::new(|| {
    NaiveDate::from_ymd_opt(2024, 10, 10)
        .expect("valid date")
        .and_hms_opt(0, 0, 0)
        .expect("valid time")
});

pub fn generate_row<R: Rng + ?Sized>(rng: &mut R) -> String {
    let path = PATHS.choose_weighted(rng, |(_, w)| *w).unwrap().0;
    let moment = *DAY_START + Duration::seconds(rng.random_range(0..86_400));
    let timestamp = moment.format("%d/%b/%Y %H:%M:%S");
    let agent = AGENTS.choose_weighted(rng, |(_, w)| *w).unwrap().0;
    let status = STATUS.choose_weighted(rng, |(_, w)| *w).unwrap().0;
    let size = rng.random_range(100..50_000);

    format!("{path}, {timestamp},{}, {status}, {size}", agent_field(agent))
}

pub fn generate_log<R: Rng + ?Sized>(rng: &mut R, rows: usize) -> String {
    let mut buffer = String::with_capacity(rows * 128);
    for _ in 0..rows {
        buffer.push_str(&generate_row(rng));
        buffer.push('\n');
    }
    buffer
}

// A quoted field only counts as quoted when the quote opens right at the
// comma, so quoted agents get no padding space.
fn agent_field(agent: &str) -> String {
    if agent.contains(',') || agent.contains('"') {
        format!("\"{}\"", agent.replace('"', "\"\""))
    } else {
        format!(" {agent}")
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use asserting::prelude::*;
    use rand::{SeedableRng, rngs::StdRng};

    // Comma count outside quotes, i.e. what a CSV consumer sees.
    fn field_count(line: &str) -> usize {
        let mut count = 1;
        let mut in_quotes = false;
        for c in line.chars() {
            match c {
                '"' => in_quotes = !in_quotes,
                ',' if !in_quotes => count += 1,
                _ => {}
            }
        }
        count
    }

    #[test]
    fn every_row_has_five_fields() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..500 {
            let row = generate_row(&mut rng);
            assert_eq!(field_count(&row), 5, "bad row: {row}");
        }
    }

    #[test]
    fn seeded_generation_is_reproducible() {
        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);
        assert_eq!(generate_log(&mut a, 100), generate_log(&mut b, 100));
    }

    #[test]
    fn generates_the_requested_number_of_rows() {
        let mut rng = StdRng::seed_from_u64(3);
        let log = generate_log(&mut rng, 250);
        assert_that!(log.lines().count()).is_equal_to(250);
    }

    #[test]
    fn timestamps_carry_a_time_token() {
        let mut rng = StdRng::seed_from_u64(9);
        let row = generate_row(&mut rng);
        let timestamp = row.split(',').nth(1).unwrap();
        let time = timestamp.split_whitespace().nth(1).unwrap();
        let hour: u8 = time.split(':').next().unwrap().parse().unwrap();
        assert_that!(usize::from(hour)).is_in_range(0..=23);
    }

    #[test]
    fn commas_in_agents_are_quoted() {
        assert_eq!(
            agent_field("Opera/9.80 (X11, U)"),
            "\"Opera/9.80 (X11, U)\""
        );
        assert_eq!(agent_field("curl/8.7.1"), " curl/8.7.1");
    }
}
