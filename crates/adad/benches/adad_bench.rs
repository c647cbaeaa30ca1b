// Criterion benchmarks for adad.
//
// Run:
//   cargo bench -p adad --features handle

use adad::Language;
use adad::handle::{Converter, ConverterOptions};
use criterion::{Criterion, criterion_group, criterion_main};

const NUMBERS: [i64; 8] = [
    0,
    7,
    1_234,
    20_015,
    1_000_001,
    123_456_789,
    -987_654_321_012,
    999_999_999_999_999,
];

fn converter(language: Language) -> Converter {
    Converter::new(ConverterOptions { language })
}

/// Encode a fixed set of numbers in every language.
fn bench_encode(c: &mut Criterion) {
    for lang in Language::ALL {
        let conv = converter(lang);
        c.bench_function(&format!("encode_8_numbers_{lang}"), |b| {
            b.iter(|| {
                for n in NUMBERS {
                    let _ = std::hint::black_box(conv.to_words(n));
                }
            });
        });
    }
}

/// Decode the spelled forms of the same numbers.
fn bench_decode(c: &mut Criterion) {
    for lang in Language::ALL {
        let conv = converter(lang);
        let texts: Vec<String> = NUMBERS
            .iter()
            .filter_map(|&n| conv.to_words(n).ok())
            .collect();
        c.bench_function(&format!("decode_8_phrases_{lang}"), |b| {
            b.iter(|| {
                for text in &texts {
                    let _ = std::hint::black_box(conv.to_number(text));
                }
            });
        });
    }
}

/// Decode text with many unknown words between number words.
fn bench_decode_noisy(c: &mut Criterion) {
    let conv = converter(Language::English);
    let text = "well it was about one thousand, uh, two hundred and thirty-four \
                or so people, maybe more";
    c.bench_function("decode_noisy_english", |b| {
        b.iter(|| {
            let _ = std::hint::black_box(conv.to_number(text));
        });
    });
}

criterion_group!(benches, bench_encode, bench_decode, bench_decode_noisy);
criterion_main!(benches);
