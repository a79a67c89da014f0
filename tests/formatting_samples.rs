//! Formatter behavior on the curated sample grammars

use jjformat::jj::testing::GrammarSample;
use jjformat::{format, format_source, FormatOptions, LineRange};
use rstest::rstest;

fn format_sample(sample: GrammarSample) -> String {
    let tokens = sample.tokens().expect("sample to tokenize");
    format(&tokens, &FormatOptions::default(), LineRange::all()).expect("sample to format")
}

#[rstest(
    sample,
    case(GrammarSample::Calculator),
    case(GrammarSample::Nodes),
    case(GrammarSample::LexerStates)
)]
fn test_samples_are_stable_after_one_pass(sample: GrammarSample) {
    let once = format_sample(sample);
    let twice = format_source(&once, &FormatOptions::default(), LineRange::all()).unwrap();
    assert_eq!(once, twice, "{} changed on the second pass", sample.file_name());
}

#[rstest(
    sample,
    case(GrammarSample::Calculator),
    case(GrammarSample::Nodes),
    case(GrammarSample::LexerStates)
)]
fn test_line_ranges_match_slices_of_the_whole(sample: GrammarSample) {
    let whole = format_sample(sample);
    let lines: Vec<&str> = whole.lines().collect();
    let options = FormatOptions::default();

    for first in 1..=lines.len() {
        if lines[first - 1].trim().is_empty() {
            continue;
        }
        for last in first..=(first + 6).min(lines.len()) {
            if lines[last - 1].trim().is_empty() {
                continue;
            }
            let ranged = format_source(&whole, &options, LineRange::new(first, last)).unwrap();
            let expected = lines[first - 1..last].join("\n");
            assert_eq!(
                ranged,
                expected,
                "{} lines {first}..={last}",
                sample.file_name()
            );
        }
    }

    let all = format_source(&whole, &options, LineRange::new(1, lines.len())).unwrap();
    assert_eq!(all, whole);
}

#[rstest(
    sample,
    case(GrammarSample::Calculator),
    case(GrammarSample::Nodes),
    case(GrammarSample::LexerStates)
)]
fn test_line_delimiter_is_used_throughout(sample: GrammarSample) {
    let lf = format_sample(sample);
    let tokens = sample.tokens().unwrap();
    let crlf = format(&tokens, &FormatOptions::new("\r\n", "\t"), LineRange::all()).unwrap();
    assert_eq!(crlf, lf.replace('\n', "\r\n"));
}

#[test]
fn test_calculator_header() {
    let output = format_sample(GrammarSample::Calculator);
    assert!(output.starts_with(concat!(
        "/* A four-function calculator. */\n",
        "options {\n",
        "\tSTATIC = false;\n",
        "\tLOOKAHEAD = 1;\n",
        "}\n",
        "\n",
        "PARSER_BEGIN(Calculator)\n",
        "package demo.calc;\n",
        "import java.io.StringReader;\n",
        "\n",
        "public class Calculator {\n",
        "\tpublic static void main(String[] args) throws ParseException {\n",
        "\t\tCalculator parser = new Calculator(new StringReader(args[0]));\n",
        "\t\tSystem.out.println(parser.Start());\n",
        "\t}\n",
        "}\n",
        "\n",
        "PARSER_END(Calculator)\n",
        "\n",
        "SKIP :\n",
    )));
}

#[test]
fn test_calculator_skip_section() {
    let output = format_sample(GrammarSample::Calculator);
    assert!(output.contains("SKIP :\n{\n\t\" \"\n| \"\\t\"\n| \"\\n\"\n| \"\\r\"\n}\n\nTOKEN :\n{\n"));
}

#[test]
fn test_trailing_comment_stays_on_its_line() {
    let output = format_sample(GrammarSample::Calculator);
    assert!(output.ends_with("} // grouping\n}"));
}
