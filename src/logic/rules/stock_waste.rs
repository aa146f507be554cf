//! 山札 (Stock) と捨て札 (Waste) に関するルールを定義するよ。

/// 山札から捨て札にカードを1枚めくれるか。
pub fn can_deal_from_stock(stock_is_empty: bool) -> bool {
    !stock_is_empty
}

/// 山札が空のときに、捨て札を山札に戻せるか。
pub fn can_reset_stock_from_waste(stock_is_empty: bool, waste_is_empty: bool) -> bool {
    stock_is_empty && !waste_is_empty
}

/// 「めくる」操作に意味があるか。山札か捨て札のどちらかにカードがあれば OK。
/// 手の数え上げで、めくる手を1つとして数えるかどうかに使うよ。
pub fn can_cycle_stock(stock_is_empty: bool, waste_is_empty: bool) -> bool {
    can_deal_from_stock(stock_is_empty) || can_reset_stock_from_waste(stock_is_empty, waste_is_empty)
}
