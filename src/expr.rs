use std::sync::atomic::{AtomicU64, Ordering};

use crate::object::Object;
use crate::token::Token;

/// Assigns a fresh, process-wide unique id to an expression node at
/// construction time. Nodes move into owned `Box`/`Vec` storage once
/// parsed, so raw addresses aren't a stable identity to key the resolver's
/// side table on; a monotonically increasing counter is.
static NEXT_ID: AtomicU64 = AtomicU64::new(0);

pub fn next_id() -> u64 {
    NEXT_ID.fetch_add(1, Ordering::Relaxed)
}

#[derive(Debug, Clone)]
pub struct AssignData {
    pub id: u64,
    pub name: Token,
    pub value: Box<Expr>,
}

#[derive(Debug, Clone)]
pub struct BinaryData {
    pub id: u64,
    pub left: Box<Expr>,
    pub operator: Token,
    pub right: Box<Expr>,
}

#[derive(Debug, Clone)]
pub struct CallData {
    pub id: u64,
    pub callee: Box<Expr>,
    pub paren: Token,
    pub arguments: Vec<Expr>,
}

#[derive(Debug, Clone)]
pub struct GetData {
    pub id: u64,
    pub object: Box<Expr>,
    pub name: Token,
}

#[derive(Debug, Clone)]
pub struct GroupingData {
    pub id: u64,
    pub expr: Box<Expr>,
}

#[derive(Debug, Clone)]
pub struct LiteralData {
    pub id: u64,
    pub value: Object,
}

#[derive(Debug, Clone)]
pub struct LogicalData {
    pub id: u64,
    pub left: Box<Expr>,
    pub operator: Token,
    pub right: Box<Expr>,
}

#[derive(Debug, Clone)]
pub struct SetData {
    pub id: u64,
    pub object: Box<Expr>,
    pub name: Token,
    pub value: Box<Expr>,
}

#[derive(Debug, Clone)]
pub struct SuperData {
    pub id: u64,
    pub keyword: Token,
    pub method: Token,
}

#[derive(Debug, Clone)]
pub struct ThisData {
    pub id: u64,
    pub keyword: Token,
}

#[derive(Debug, Clone)]
pub struct UnaryData {
    pub id: u64,
    pub operator: Token,
    pub expr: Box<Expr>,
}

#[derive(Debug, Clone)]
pub struct VariableData {
    pub id: u64,
    pub name: Token,
}

#[derive(Debug, Clone)]
pub struct ArrayData {
    pub id: u64,
    pub values: Vec<Expr>,
}

/// An expression: a piece of code that produces an `Object` when evaluated.
#[derive(Debug, Clone)]
pub enum Expr {
    Assign(AssignData),
    Binary(BinaryData),
    Call(CallData),
    Get(GetData),
    Grouping(GroupingData),
    Literal(LiteralData),
    Logical(LogicalData),
    Set(SetData),
    Super(SuperData),
    This(ThisData),
    Unary(UnaryData),
    Variable(VariableData),
    Array(ArrayData),
}

impl Expr {
    /// The stable identity used as a key into the resolver's side table.
    pub fn id(&self) -> u64 {
        match self {
            Expr::Assign(data) => data.id,
            Expr::Binary(data) => data.id,
            Expr::Call(data) => data.id,
            Expr::Get(data) => data.id,
            Expr::Grouping(data) => data.id,
            Expr::Literal(data) => data.id,
            Expr::Logical(data) => data.id,
            Expr::Set(data) => data.id,
            Expr::Super(data) => data.id,
            Expr::This(data) => data.id,
            Expr::Unary(data) => data.id,
            Expr::Variable(data) => data.id,
            Expr::Array(data) => data.id,
        }
    }

    /// Accepts a visitor and returns the result of the visit.
    pub fn accept<T>(&self, visitor: &mut dyn ExprVisitor<T>) -> T {
        match self {
            Expr::Assign(_) => visitor.visit_assign_expr(self),
            Expr::Binary(_) => visitor.visit_binary_expr(self),
            Expr::Call(_) => visitor.visit_call_expr(self),
            Expr::Get(_) => visitor.visit_get_expr(self),
            Expr::Grouping(_) => visitor.visit_grouping_expr(self),
            Expr::Literal(_) => visitor.visit_literal_expr(self),
            Expr::Logical(_) => visitor.visit_logical_expr(self),
            Expr::Set(_) => visitor.visit_set_expr(self),
            Expr::Super(_) => visitor.visit_super_expr(self),
            Expr::This(_) => visitor.visit_this_expr(self),
            Expr::Unary(_) => visitor.visit_unary_expr(self),
            Expr::Variable(_) => visitor.visit_variable_expr(self),
            Expr::Array(_) => visitor.visit_array_expr(self),
        }
    }
}

pub trait ExprVisitor<T> {
    fn visit_assign_expr(&mut self, expr: &Expr) -> T;
    fn visit_binary_expr(&mut self, expr: &Expr) -> T;
    fn visit_call_expr(&mut self, expr: &Expr) -> T;
    fn visit_get_expr(&mut self, expr: &Expr) -> T;
    fn visit_grouping_expr(&mut self, expr: &Expr) -> T;
    fn visit_literal_expr(&mut self, expr: &Expr) -> T;
    fn visit_logical_expr(&mut self, expr: &Expr) -> T;
    fn visit_set_expr(&mut self, expr: &Expr) -> T;
    fn visit_super_expr(&mut self, expr: &Expr) -> T;
    fn visit_this_expr(&mut self, expr: &Expr) -> T;
    fn visit_unary_expr(&mut self, expr: &Expr) -> T;
    fn visit_variable_expr(&mut self, expr: &Expr) -> T;
    fn visit_array_expr(&mut self, expr: &Expr) -> T;
}
