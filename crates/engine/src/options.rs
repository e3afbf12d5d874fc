/// Visitation policy of the directory work-list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TraversalOrder {
    /// 後入れ先出し（スタック）
    #[default]
    DepthFirst,
    /// 先入れ先出し（キュー）
    BreadthFirst,
}
