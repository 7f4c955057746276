use financeflow_wasm::domain::market_data::TickerBoard;
use financeflow_wasm::presentation::format::{
    dollars, quote_line, signed_dollars, signed_percent,
};

#[test]
fn seeded_board_renders_the_opening_quotes() {
    let board = TickerBoard::seeded();
    let lines: Vec<String> = board.entries().iter().map(quote_line).collect();

    insta::assert_json_snapshot!(lines, @r###"
    [
      "S&P 500 $4285.32 +24.18 (+0.57%) up",
      "NASDAQ $13234.52 -18.45 (-0.14%) down",
      "DOW $33875.23 +156.78 (+0.47%) up",
      "BITCOIN $43250.18 +1205.43 (+2.87%) up"
    ]
    "###);
}

#[test]
fn money_formatting_matches_the_board_style() {
    assert_eq!(dollars(4285.32), "$4285.32");
    assert_eq!(dollars(0.0), "$0.00");
    assert_eq!(signed_dollars(24.18), "+$24.18");
    assert_eq!(signed_dollars(-18.45), "-$18.45");
    assert_eq!(signed_percent(0.57), "+0.57%");
    assert_eq!(signed_percent(-0.14), "-0.14%");
}
