//! Recursive visitors for the AST.
//!
//! [`Visitor`] exposes typed pre/post hooks for the node categories a
//! traversal can observe: statements, queries, table factors, relations
//! (object names used as tables) and expressions. [`Visit`] is the walker:
//! a hand-written, exhaustive match over every variant that calls
//! `pre_visit_*` on the parent, descends into the children in declaration
//! order, then calls `post_visit_*`. Returning [`ControlFlow::Break`] from
//! any hook stops the walk immediately.

#[cfg(not(feature = "std"))]
use alloc::{boxed::Box, vec::Vec};
use core::ops::ControlFlow;

use crate::ast::*;

/// A visitor with typed pre/post hooks.
///
/// Every hook defaults to [`ControlFlow::Continue`], so an implementation
/// only overrides the hooks it cares about.
pub trait Visitor {
    /// The early-exit payload carried by [`ControlFlow::Break`].
    type Break;

    /// Invoked before any children of a statement are visited.
    fn pre_visit_statement(&mut self, _statement: &Statement) -> ControlFlow<Self::Break> {
        ControlFlow::Continue(())
    }

    /// Invoked after all children of a statement are visited.
    fn post_visit_statement(&mut self, _statement: &Statement) -> ControlFlow<Self::Break> {
        ControlFlow::Continue(())
    }

    /// Invoked before any children of a query are visited.
    fn pre_visit_query(&mut self, _query: &Query) -> ControlFlow<Self::Break> {
        ControlFlow::Continue(())
    }

    /// Invoked after all children of a query are visited.
    fn post_visit_query(&mut self, _query: &Query) -> ControlFlow<Self::Break> {
        ControlFlow::Continue(())
    }

    /// Invoked before any children of a table factor are visited.
    fn pre_visit_table_factor(&mut self, _table_factor: &TableFactor) -> ControlFlow<Self::Break> {
        ControlFlow::Continue(())
    }

    /// Invoked after all children of a table factor are visited.
    fn post_visit_table_factor(&mut self, _table_factor: &TableFactor) -> ControlFlow<Self::Break> {
        ControlFlow::Continue(())
    }

    /// Invoked for every object name that denotes a relation.
    fn pre_visit_relation(&mut self, _relation: &ObjectName) -> ControlFlow<Self::Break> {
        ControlFlow::Continue(())
    }

    /// Invoked after a relation object name.
    fn post_visit_relation(&mut self, _relation: &ObjectName) -> ControlFlow<Self::Break> {
        ControlFlow::Continue(())
    }

    /// Invoked before any children of an expression are visited.
    fn pre_visit_expr(&mut self, _expr: &Expr) -> ControlFlow<Self::Break> {
        ControlFlow::Continue(())
    }

    /// Invoked after all children of an expression are visited.
    fn post_visit_expr(&mut self, _expr: &Expr) -> ControlFlow<Self::Break> {
        ControlFlow::Continue(())
    }
}

/// A node that can be walked by a [`Visitor`].
pub trait Visit {
    /// Walks `self`, dispatching to the visitor's hooks.
    fn visit<V: Visitor>(&self, visitor: &mut V) -> ControlFlow<V::Break>;
}

impl<T: Visit> Visit for Option<T> {
    fn visit<V: Visitor>(&self, visitor: &mut V) -> ControlFlow<V::Break> {
        if let Some(node) = self {
            node.visit(visitor)?;
        }
        ControlFlow::Continue(())
    }
}

impl<T: Visit> Visit for Vec<T> {
    fn visit<V: Visitor>(&self, visitor: &mut V) -> ControlFlow<V::Break> {
        for node in self {
            node.visit(visitor)?;
        }
        ControlFlow::Continue(())
    }
}

impl<T: Visit> Visit for Box<T> {
    fn visit<V: Visitor>(&self, visitor: &mut V) -> ControlFlow<V::Break> {
        (**self).visit(visitor)
    }
}

fn visit_relation<V: Visitor>(name: &ObjectName, visitor: &mut V) -> ControlFlow<V::Break> {
    visitor.pre_visit_relation(name)?;
    visitor.post_visit_relation(name)
}

fn visit_column_def<V: Visitor>(column: &ColumnDef, visitor: &mut V) -> ControlFlow<V::Break> {
    for option in &column.options {
        match &option.option {
            ColumnOption::Default(expr) | ColumnOption::Check(expr) => expr.visit(visitor)?,
            ColumnOption::ForeignKey { foreign_table, .. } => {
                visit_relation(foreign_table, visitor)?
            }
            ColumnOption::Generated {
                generation_expr, ..
            } => generation_expr.visit(visitor)?,
            ColumnOption::Null
            | ColumnOption::NotNull
            | ColumnOption::Unique { .. }
            | ColumnOption::Comment(_)
            | ColumnOption::Invisible => {}
        }
    }
    ControlFlow::Continue(())
}

fn visit_table_constraint<V: Visitor>(
    constraint: &TableConstraint,
    visitor: &mut V,
) -> ControlFlow<V::Break> {
    match constraint {
        TableConstraint::Check { expr, .. } => expr.visit(visitor),
        TableConstraint::ForeignKey { foreign_table, .. } => {
            visit_relation(foreign_table, visitor)
        }
        TableConstraint::Unique { .. } | TableConstraint::PrimaryKey { .. } => {
            ControlFlow::Continue(())
        }
    }
}

fn visit_sequence_options<V: Visitor>(
    options: &[SequenceOptions],
    visitor: &mut V,
) -> ControlFlow<V::Break> {
    for option in options {
        match option {
            SequenceOptions::IncrementBy(expr)
            | SequenceOptions::MinValue(expr)
            | SequenceOptions::MaxValue(expr)
            | SequenceOptions::StartWith(expr)
            | SequenceOptions::Cache(expr) => expr.visit(visitor)?,
            SequenceOptions::NoMinValue
            | SequenceOptions::NoMaxValue
            | SequenceOptions::Cycle
            | SequenceOptions::NoCycle => {}
        }
    }
    ControlFlow::Continue(())
}

impl Visit for Statement {
    fn visit<V: Visitor>(&self, visitor: &mut V) -> ControlFlow<V::Break> {
        visitor.pre_visit_statement(self)?;
        match self {
            Statement::Query(query) => query.visit(visitor)?,
            Statement::Insert(stmt) => {
                visit_relation(&stmt.table_name, visitor)?;
                stmt.source.visit(visitor)?;
                if let Some(returning) = &stmt.returning {
                    returning.visit(visitor)?;
                }
            }
            Statement::Update(stmt) => {
                stmt.table.visit(visitor)?;
                for assignment in &stmt.assignments {
                    assignment.value.visit(visitor)?;
                }
                stmt.from.visit(visitor)?;
                stmt.selection.visit(visitor)?;
                if let Some(returning) = &stmt.returning {
                    returning.visit(visitor)?;
                }
            }
            Statement::Delete(stmt) => {
                stmt.from.visit(visitor)?;
                if let Some(using) = &stmt.using {
                    using.visit(visitor)?;
                }
                stmt.selection.visit(visitor)?;
                if let Some(returning) = &stmt.returning {
                    returning.visit(visitor)?;
                }
            }
            Statement::Merge(stmt) => {
                stmt.table.visit(visitor)?;
                stmt.source.visit(visitor)?;
                stmt.on.visit(visitor)?;
                for clause in &stmt.clauses {
                    clause.predicate.visit(visitor)?;
                    match &clause.action {
                        MergeAction::Update { assignments } => {
                            for assignment in assignments {
                                assignment.value.visit(visitor)?;
                            }
                        }
                        MergeAction::Delete => {}
                        MergeAction::Insert { values, .. } => values.visit(visitor)?,
                    }
                }
            }
            Statement::Copy(stmt) => match &stmt.source {
                CopySource::Table { table_name, .. } => visit_relation(table_name, visitor)?,
                CopySource::Query(query) => query.visit(visitor)?,
            },
            Statement::Truncate(stmt) => {
                for name in &stmt.table_names {
                    visit_relation(name, visitor)?;
                }
            }
            Statement::Unload(stmt) => stmt.query.visit(visitor)?,
            Statement::CreateTable(stmt) => {
                visit_relation(&stmt.name, visitor)?;
                for column in &stmt.columns {
                    visit_column_def(column, visitor)?;
                }
                for constraint in &stmt.constraints {
                    visit_table_constraint(constraint, visitor)?;
                }
                if let Some(partition_of) = &stmt.partition_of {
                    visit_relation(partition_of, visitor)?;
                }
                if let Some(clone) = &stmt.clone {
                    visit_relation(clone, visitor)?;
                }
                if let Some(like) = &stmt.like {
                    visit_relation(like, visitor)?;
                }
                if let Some(partition_by) = &stmt.partition_by {
                    partition_by.visit(visitor)?;
                }
                stmt.query.visit(visitor)?;
                if let Some(as_table) = &stmt.as_table {
                    visit_relation(as_table, visitor)?;
                }
            }
            Statement::AlterTable(stmt) => {
                visit_relation(&stmt.name, visitor)?;
                for operation in &stmt.operations {
                    match operation {
                        AlterTableOperation::AddColumn { column_def, .. } => {
                            visit_column_def(column_def, visitor)?
                        }
                        AlterTableOperation::AddConstraint(constraint) => {
                            visit_table_constraint(constraint, visitor)?
                        }
                        AlterTableOperation::AlterColumn { op, .. } => match op {
                            AlterColumnOperation::SetDefault(expr) => expr.visit(visitor)?,
                            AlterColumnOperation::SetDataType { using, .. } => {
                                using.visit(visitor)?
                            }
                            AlterColumnOperation::SetNotNull
                            | AlterColumnOperation::DropNotNull
                            | AlterColumnOperation::DropDefault => {}
                        },
                        AlterTableOperation::RenameTable { new_name } => {
                            visit_relation(new_name, visitor)?
                        }
                        AlterTableOperation::AddConstraintUsingIndex { .. }
                        | AlterTableOperation::DropColumn { .. }
                        | AlterTableOperation::DropConstraint { .. }
                        | AlterTableOperation::RenameColumn { .. }
                        | AlterTableOperation::ValidateConstraint { .. }
                        | AlterTableOperation::ReplicaIdentity(_)
                        | AlterTableOperation::SetSchema { .. }
                        | AlterTableOperation::OwnerTo(_) => {}
                    }
                }
            }
            Statement::AlterView(stmt) => {
                visit_relation(&stmt.name, visitor)?;
                stmt.query.visit(visitor)?;
            }
            Statement::CreateFunction(stmt) => {
                for arg in &stmt.args {
                    arg.default_expr.visit(visitor)?;
                }
                stmt.body.visit(visitor)?;
            }
            Statement::CreateProcedure(stmt) => {
                for param in &stmt.params {
                    param.default_expr.visit(visitor)?;
                }
                stmt.body.visit(visitor)?;
            }
            Statement::CreateTrigger(stmt) => {
                visit_relation(&stmt.table_name, visitor)?;
                stmt.condition.visit(visitor)?;
                stmt.exec_body.args.visit(visitor)?;
            }
            Statement::CreatePolicy(stmt) => {
                visit_relation(&stmt.table_name, visitor)?;
                stmt.using.visit(visitor)?;
                stmt.with_check.visit(visitor)?;
            }
            Statement::CreateSequence(stmt) => {
                visit_sequence_options(&stmt.sequence_options, visitor)?;
            }
            Statement::AlterSequence(stmt) => {
                visit_sequence_options(&stmt.sequence_options, visitor)?;
            }
            Statement::CreateView(stmt) => {
                visit_relation(&stmt.name, visitor)?;
                stmt.query.visit(visitor)?;
            }
            Statement::CreateIndex(stmt) => {
                visit_relation(&stmt.table_name, visitor)?;
                stmt.columns.visit(visitor)?;
                stmt.predicate.visit(visitor)?;
            }
            Statement::Explain { statement, .. } => statement.visit(visitor)?,
            Statement::ExplainTable { table_name, .. } => visit_relation(table_name, visitor)?,
            Statement::Prepare { statement, .. } => statement.visit(visitor)?,
            Statement::Execute { parameters, .. } => parameters.visit(visitor)?,
            Statement::ExecuteImmediate { statement, using } => {
                statement.visit(visitor)?;
                using.visit(visitor)?;
            }
            Statement::SetVariable { value, .. } => value.visit(visitor)?,
            Statement::SetTimeZone { value, .. } => value.visit(visitor)?,
            Statement::Cache { query, .. } => query.visit(visitor)?,
            Statement::Assert { condition, message } => {
                condition.visit(visitor)?;
                message.visit(visitor)?;
            }
            Statement::Print { message } => message.visit(visitor)?,
            Statement::RaiseError {
                message,
                severity,
                state,
                arguments,
            } => {
                message.visit(visitor)?;
                severity.visit(visitor)?;
                state.visit(visitor)?;
                arguments.visit(visitor)?;
            }
            Statement::Raise { value } => {
                if let Some(value) = value {
                    value.visit(visitor)?;
                }
            }
            Statement::Call(function) => function.visit(visitor)?,
            Statement::If(stmt) => {
                stmt.condition.visit(visitor)?;
                stmt.then_body.visit(visitor)?;
                for elseif in &stmt.elseifs {
                    elseif.condition.visit(visitor)?;
                    elseif.body.visit(visitor)?;
                }
                stmt.else_body.visit(visitor)?;
            }
            Statement::While(stmt) => {
                stmt.condition.visit(visitor)?;
                stmt.body.visit(visitor)?;
            }
            Statement::CaseStatement(stmt) => {
                stmt.operand.visit(visitor)?;
                for when in &stmt.when_blocks {
                    when.condition.visit(visitor)?;
                    when.body.visit(visitor)?;
                }
                stmt.else_body.visit(visitor)?;
            }
            // The remaining statements reference objects by bare name and
            // carry option lists and literals; there are no queries,
            // relations or predicate expressions left to descend into.
            _ => {}
        }
        visitor.post_visit_statement(self)
    }
}

impl Visit for Query {
    fn visit<V: Visitor>(&self, visitor: &mut V) -> ControlFlow<V::Break> {
        visitor.pre_visit_query(self)?;
        if let Some(with) = &self.with {
            for cte in &with.cte_tables {
                cte.query.visit(visitor)?;
            }
        }
        self.body.visit(visitor)?;
        self.order_by.visit(visitor)?;
        self.limit.visit(visitor)?;
        if let Some(offset) = &self.offset {
            offset.value.visit(visitor)?;
        }
        if let Some(fetch) = &self.fetch {
            fetch.quantity.visit(visitor)?;
        }
        visitor.post_visit_query(self)
    }
}

impl Visit for SetExpr {
    fn visit<V: Visitor>(&self, visitor: &mut V) -> ControlFlow<V::Break> {
        match self {
            SetExpr::Select(select) => select.visit(visitor),
            SetExpr::Query(query) => query.visit(visitor),
            SetExpr::SetOperation { left, right, .. } => {
                left.visit(visitor)?;
                right.visit(visitor)
            }
            SetExpr::Values(values) => {
                for row in &values.rows {
                    row.visit(visitor)?;
                }
                ControlFlow::Continue(())
            }
            SetExpr::Table(name) => visit_relation(name, visitor),
        }
    }
}

impl Visit for Select {
    fn visit<V: Visitor>(&self, visitor: &mut V) -> ControlFlow<V::Break> {
        self.projection.visit(visitor)?;
        self.from.visit(visitor)?;
        for lateral_view in &self.lateral_views {
            lateral_view.lateral_view.visit(visitor)?;
        }
        self.selection.visit(visitor)?;
        self.group_by.visit(visitor)?;
        self.cluster_by.visit(visitor)?;
        self.distribute_by.visit(visitor)?;
        self.sort_by.visit(visitor)?;
        self.having.visit(visitor)?;
        self.qualify.visit(visitor)?;
        if let Some(connect_by) = &self.connect_by {
            connect_by.condition.visit(visitor)?;
            connect_by.relationships.visit(visitor)?;
        }
        ControlFlow::Continue(())
    }
}

impl Visit for SelectItem {
    fn visit<V: Visitor>(&self, visitor: &mut V) -> ControlFlow<V::Break> {
        match self {
            SelectItem::UnnamedExpr(expr) => expr.visit(visitor),
            SelectItem::ExprWithAlias { expr, .. } => expr.visit(visitor),
            SelectItem::QualifiedWildcard(..) | SelectItem::Wildcard(_) => {
                ControlFlow::Continue(())
            }
        }
    }
}

impl Visit for TableWithJoins {
    fn visit<V: Visitor>(&self, visitor: &mut V) -> ControlFlow<V::Break> {
        self.relation.visit(visitor)?;
        for join in &self.joins {
            join.relation.visit(visitor)?;
            match &join.join_operator {
                JoinOperator::Inner(constraint)
                | JoinOperator::LeftOuter(constraint)
                | JoinOperator::RightOuter(constraint)
                | JoinOperator::FullOuter(constraint)
                | JoinOperator::Semi(constraint)
                | JoinOperator::LeftSemi(constraint)
                | JoinOperator::RightSemi(constraint)
                | JoinOperator::Anti(constraint)
                | JoinOperator::LeftAnti(constraint)
                | JoinOperator::RightAnti(constraint)
                | JoinOperator::StraightJoin(constraint) => {
                    if let JoinConstraint::On(expr) = constraint {
                        expr.visit(visitor)?;
                    }
                }
                JoinOperator::CrossJoin => {}
            }
        }
        ControlFlow::Continue(())
    }
}

impl Visit for TableFactor {
    fn visit<V: Visitor>(&self, visitor: &mut V) -> ControlFlow<V::Break> {
        visitor.pre_visit_table_factor(self)?;
        match self {
            TableFactor::Table { name, args, .. } => {
                visit_relation(name, visitor)?;
                if let Some(args) = args {
                    args.visit(visitor)?;
                }
            }
            TableFactor::Derived { subquery, .. } => subquery.visit(visitor)?,
            TableFactor::TableFunction { expr, .. } => expr.visit(visitor)?,
            TableFactor::Function { args, .. } => args.visit(visitor)?,
            TableFactor::UnNest { array_exprs, .. } => array_exprs.visit(visitor)?,
            TableFactor::NestedJoin {
                table_with_joins, ..
            } => table_with_joins.visit(visitor)?,
            TableFactor::Pivot {
                table,
                aggregate_functions,
                value_source,
                ..
            } => {
                table.visit(visitor)?;
                for func in aggregate_functions {
                    func.expr.visit(visitor)?;
                }
                for value in value_source {
                    value.expr.visit(visitor)?;
                }
            }
            TableFactor::Unpivot { table, .. } => table.visit(visitor)?,
            TableFactor::TableSample {
                table, quantity, ..
            } => {
                table.visit(visitor)?;
                quantity.visit(visitor)?;
            }
            TableFactor::MatchRecognize(mr) => {
                mr.table.visit(visitor)?;
                mr.partition_by.visit(visitor)?;
                mr.order_by.visit(visitor)?;
                for measure in &mr.measures {
                    measure.expr.visit(visitor)?;
                }
                for symbol in &mr.symbols {
                    symbol.definition.visit(visitor)?;
                }
            }
            TableFactor::XmlTable {
                row_expression,
                passing,
                ..
            } => {
                row_expression.visit(visitor)?;
                passing.visit(visitor)?;
            }
            TableFactor::SemanticView {
                name,
                metrics,
                dimensions,
                ..
            } => {
                visit_relation(name, visitor)?;
                metrics.visit(visitor)?;
                dimensions.visit(visitor)?;
            }
            TableFactor::OpenJson { json_expr, .. } => json_expr.visit(visitor)?,
            TableFactor::JsonTable { json_expr, .. } => json_expr.visit(visitor)?,
        }
        visitor.post_visit_table_factor(self)
    }
}

impl Visit for OrderByExpr {
    fn visit<V: Visitor>(&self, visitor: &mut V) -> ControlFlow<V::Break> {
        self.expr.visit(visitor)
    }
}

impl Visit for FunctionArg {
    fn visit<V: Visitor>(&self, visitor: &mut V) -> ControlFlow<V::Break> {
        match self {
            FunctionArg::Named { arg, .. } => arg.visit(visitor),
            FunctionArg::Unnamed(arg) => arg.visit(visitor),
        }
    }
}

impl Visit for FunctionArgExpr {
    fn visit<V: Visitor>(&self, visitor: &mut V) -> ControlFlow<V::Break> {
        match self {
            FunctionArgExpr::Expr(expr) => expr.visit(visitor),
            FunctionArgExpr::QualifiedWildcard(_) | FunctionArgExpr::Wildcard => {
                ControlFlow::Continue(())
            }
        }
    }
}

impl Visit for Function {
    fn visit<V: Visitor>(&self, visitor: &mut V) -> ControlFlow<V::Break> {
        self.args.visit(visitor)?;
        self.order_by.visit(visitor)?;
        self.limit.visit(visitor)?;
        self.filter.visit(visitor)?;
        self.within_group.visit(visitor)?;
        if let Some(WindowType::WindowSpec(spec)) = &self.over {
            spec.partition_by.visit(visitor)?;
            spec.order_by.visit(visitor)?;
        }
        ControlFlow::Continue(())
    }
}

impl Visit for Expr {
    fn visit<V: Visitor>(&self, visitor: &mut V) -> ControlFlow<V::Break> {
        visitor.pre_visit_expr(self)?;
        match self {
            Expr::Identifier(_)
            | Expr::CompoundIdentifier(_)
            | Expr::Wildcard
            | Expr::QualifiedWildcard(_)
            | Expr::Value(_)
            | Expr::TypedString { .. } => {}
            Expr::Interval(interval) => interval.value.visit(visitor)?,
            Expr::IsNull(e) => e.expr.visit(visitor)?,
            Expr::IsBool(e) => e.expr.visit(visitor)?,
            Expr::IsDistinctFrom(e) => {
                e.left.visit(visitor)?;
                e.right.visit(visitor)?;
            }
            Expr::IsNormalized(e) => e.expr.visit(visitor)?,
            Expr::InList(e) => {
                e.expr.visit(visitor)?;
                e.list.visit(visitor)?;
            }
            Expr::InSubquery(e) => {
                e.expr.visit(visitor)?;
                e.subquery.visit(visitor)?;
            }
            Expr::InUnnest(e) => {
                e.expr.visit(visitor)?;
                e.array_expr.visit(visitor)?;
            }
            Expr::Between(e) => {
                e.expr.visit(visitor)?;
                e.low.visit(visitor)?;
                e.high.visit(visitor)?;
            }
            Expr::Like(e) => {
                e.expr.visit(visitor)?;
                e.pattern.visit(visitor)?;
            }
            Expr::BinaryOp(e) => {
                e.left.visit(visitor)?;
                e.right.visit(visitor)?;
            }
            Expr::UnaryOp(e) => e.expr.visit(visitor)?,
            Expr::AnyOp(e) | Expr::AllOp(e) => {
                e.left.visit(visitor)?;
                e.right.visit(visitor)?;
            }
            Expr::Cast(e) => e.expr.visit(visitor)?,
            Expr::AtTimeZone(e) => {
                e.timestamp.visit(visitor)?;
                e.time_zone.visit(visitor)?;
            }
            Expr::Extract(e) => e.expr.visit(visitor)?,
            Expr::CeilFloor(e) => e.expr.visit(visitor)?,
            Expr::Position(e) => {
                e.expr.visit(visitor)?;
                e.r#in.visit(visitor)?;
            }
            Expr::Substring(e) => {
                e.expr.visit(visitor)?;
                e.substring_from.visit(visitor)?;
                e.substring_for.visit(visitor)?;
            }
            Expr::Trim(e) => {
                e.trim_what.visit(visitor)?;
                e.expr.visit(visitor)?;
            }
            Expr::Overlay(e) => {
                e.expr.visit(visitor)?;
                e.overlay_what.visit(visitor)?;
                e.overlay_from.visit(visitor)?;
                e.overlay_for.visit(visitor)?;
            }
            Expr::Collate(e) => e.expr.visit(visitor)?,
            Expr::Nested(e) => e.visit(visitor)?,
            Expr::Tuple(exprs) => exprs.visit(visitor)?,
            Expr::Array(e) => e.elem.visit(visitor)?,
            Expr::Map(e) => {
                for entry in &e.entries {
                    entry.key.visit(visitor)?;
                    entry.value.visit(visitor)?;
                }
            }
            Expr::Dictionary(fields) => {
                for field in fields {
                    field.key.visit(visitor)?;
                    field.value.visit(visitor)?;
                }
            }
            Expr::Subscript(e) => {
                e.expr.visit(visitor)?;
                e.subscript.visit(visitor)?;
            }
            Expr::Case(e) => {
                e.operand.visit(visitor)?;
                e.conditions.visit(visitor)?;
                e.results.visit(visitor)?;
                e.else_result.visit(visitor)?;
            }
            Expr::Exists(e) => e.subquery.visit(visitor)?,
            Expr::Subquery(query) => query.visit(visitor)?,
            Expr::Function(function) => function.visit(visitor)?,
            Expr::MemberOf(e) => {
                e.value.visit(visitor)?;
                e.array.visit(visitor)?;
            }
            Expr::Overlaps(e) => {
                e.left.visit(visitor)?;
                e.right.visit(visitor)?;
            }
            Expr::ConnectByRoot(e) | Expr::Prior(e) => e.visit(visitor)?,
            Expr::GroupingSets(sets) | Expr::Rollup(sets) | Expr::Cube(sets) => {
                for set in sets {
                    set.visit(visitor)?;
                }
            }
        }
        visitor.post_visit_expr(self)
    }
}

/// Invokes `f` on every relation (table object name) appearing in `statement`.
pub fn visit_relations<B>(
    statement: &Statement,
    f: impl FnMut(&ObjectName) -> ControlFlow<B>,
) -> ControlFlow<B> {
    struct RelationVisitor<F>(F);
    impl<B, F: FnMut(&ObjectName) -> ControlFlow<B>> Visitor for RelationVisitor<F> {
        type Break = B;
        fn pre_visit_relation(&mut self, relation: &ObjectName) -> ControlFlow<B> {
            (self.0)(relation)
        }
    }
    statement.visit(&mut RelationVisitor(f))
}

/// Invokes `f` on every expression appearing in `statement`, parents first.
pub fn visit_expressions<B>(
    statement: &Statement,
    f: impl FnMut(&Expr) -> ControlFlow<B>,
) -> ControlFlow<B> {
    struct ExprVisitor<F>(F);
    impl<B, F: FnMut(&Expr) -> ControlFlow<B>> Visitor for ExprVisitor<F> {
        type Break = B;
        fn pre_visit_expr(&mut self, expr: &Expr) -> ControlFlow<B> {
            (self.0)(expr)
        }
    }
    statement.visit(&mut ExprVisitor(f))
}

/// Invokes `f` on `statement` and every statement nested inside it.
pub fn visit_statements<B>(
    statement: &Statement,
    f: impl FnMut(&Statement) -> ControlFlow<B>,
) -> ControlFlow<B> {
    struct StatementVisitor<F>(F);
    impl<B, F: FnMut(&Statement) -> ControlFlow<B>> Visitor for StatementVisitor<F> {
        type Break = B;
        fn pre_visit_statement(&mut self, statement: &Statement) -> ControlFlow<B> {
            (self.0)(statement)
        }
    }
    statement.visit(&mut StatementVisitor(f))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialect::GenericDialect;
    use crate::parser::Parser;

    #[cfg(not(feature = "std"))]
    use alloc::{format, string::String, vec};

    #[derive(Default)]
    struct Recorder {
        events: Vec<String>,
    }

    impl Visitor for Recorder {
        type Break = ();

        fn pre_visit_statement(&mut self, _: &Statement) -> ControlFlow<()> {
            self.events.push("PRE: STATEMENT".into());
            ControlFlow::Continue(())
        }
        fn post_visit_statement(&mut self, _: &Statement) -> ControlFlow<()> {
            self.events.push("POST: STATEMENT".into());
            ControlFlow::Continue(())
        }
        fn pre_visit_query(&mut self, _: &Query) -> ControlFlow<()> {
            self.events.push("PRE: QUERY".into());
            ControlFlow::Continue(())
        }
        fn post_visit_query(&mut self, _: &Query) -> ControlFlow<()> {
            self.events.push("POST: QUERY".into());
            ControlFlow::Continue(())
        }
        fn pre_visit_table_factor(&mut self, tf: &TableFactor) -> ControlFlow<()> {
            self.events.push(format!("PRE: TABLE FACTOR: {tf}"));
            ControlFlow::Continue(())
        }
        fn post_visit_table_factor(&mut self, tf: &TableFactor) -> ControlFlow<()> {
            self.events.push(format!("POST: TABLE FACTOR: {tf}"));
            ControlFlow::Continue(())
        }
        fn pre_visit_relation(&mut self, relation: &ObjectName) -> ControlFlow<()> {
            self.events.push(format!("PRE: RELATION: {relation}"));
            ControlFlow::Continue(())
        }
        fn post_visit_relation(&mut self, relation: &ObjectName) -> ControlFlow<()> {
            self.events.push(format!("POST: RELATION: {relation}"));
            ControlFlow::Continue(())
        }
        fn pre_visit_expr(&mut self, expr: &Expr) -> ControlFlow<()> {
            self.events.push(format!("PRE: EXPR: {expr}"));
            ControlFlow::Continue(())
        }
        fn post_visit_expr(&mut self, expr: &Expr) -> ControlFlow<()> {
            self.events.push(format!("POST: EXPR: {expr}"));
            ControlFlow::Continue(())
        }
    }

    fn record(sql: &str) -> Vec<String> {
        let dialect = GenericDialect {};
        let statements = Parser::parse_sql(&dialect, sql).unwrap();
        let mut recorder = Recorder::default();
        for statement in &statements {
            let _ = statement.visit(&mut recorder);
        }
        recorder.events
    }

    #[test]
    fn visit_join_in_order() {
        let events = record("SELECT * FROM t1 JOIN t2 ON t1.id = t2.t1_id");
        assert_eq!(
            events,
            vec![
                "PRE: STATEMENT",
                "PRE: QUERY",
                "PRE: TABLE FACTOR: t1",
                "PRE: RELATION: t1",
                "POST: RELATION: t1",
                "POST: TABLE FACTOR: t1",
                "PRE: TABLE FACTOR: t2",
                "PRE: RELATION: t2",
                "POST: RELATION: t2",
                "POST: TABLE FACTOR: t2",
                "PRE: EXPR: t1.id = t2.t1_id",
                "PRE: EXPR: t1.id",
                "POST: EXPR: t1.id",
                "PRE: EXPR: t2.t1_id",
                "POST: EXPR: t2.t1_id",
                "POST: EXPR: t1.id = t2.t1_id",
                "POST: QUERY",
                "POST: STATEMENT",
            ]
        );
    }

    #[test]
    fn break_stops_the_walk() {
        let dialect = GenericDialect {};
        let statements = Parser::parse_sql(&dialect, "SELECT a, b, c FROM t").unwrap();
        let mut seen = 0usize;
        let flow = visit_expressions(&statements[0], |_| {
            seen += 1;
            if seen == 2 {
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        });
        assert_eq!(flow, ControlFlow::Break(()));
        assert_eq!(seen, 2);
    }

    #[test]
    fn collect_relations() {
        let dialect = GenericDialect {};
        let statements =
            Parser::parse_sql(&dialect, "SELECT * FROM a.b JOIN c ON 1 = 1").unwrap();
        let mut relations = vec![];
        let _ = visit_relations(&statements[0], |relation| {
            relations.push(relation.to_string());
            ControlFlow::<()>::Continue(())
        });
        assert_eq!(relations, vec!["a.b", "c"]);
    }

    fn relations_of(sql: &str) -> Vec<String> {
        let dialect = GenericDialect {};
        let statements = Parser::parse_sql(&dialect, sql).unwrap();
        let mut relations = vec![];
        let _ = visit_relations(&statements[0], |relation| {
            relations.push(relation.to_string());
            ControlFlow::<()>::Continue(())
        });
        relations
    }

    fn expressions_of(sql: &str) -> Vec<String> {
        let dialect = GenericDialect {};
        let statements = Parser::parse_sql(&dialect, sql).unwrap();
        let mut exprs = vec![];
        let _ = visit_expressions(&statements[0], |expr| {
            exprs.push(expr.to_string());
            ControlFlow::<()>::Continue(())
        });
        exprs
    }

    #[test]
    fn visit_create_table_children() {
        // column options, table constraints and the AS query are all walked
        let relations = relations_of(
            "CREATE TABLE t (a INT REFERENCES o (id), CONSTRAINT fk FOREIGN KEY (a) REFERENCES p (id)) AS SELECT * FROM src",
        );
        assert_eq!(relations, vec!["t", "o", "p", "src"]);

        let relations = relations_of("CREATE TABLE t2 LIKE t1");
        assert_eq!(relations, vec!["t2", "t1"]);
        let relations = relations_of("CREATE TABLE t2 CLONE t1");
        assert_eq!(relations, vec!["t2", "t1"]);
        let relations = relations_of("CREATE TABLE t2 AS TABLE t1");
        assert_eq!(relations, vec!["t2", "t1"]);
        let relations = relations_of("CREATE TABLE m0 PARTITION OF m DEFAULT");
        assert_eq!(relations, vec!["m0", "m"]);

        let exprs = expressions_of(
            "CREATE TABLE t (a INT DEFAULT 7, b INT GENERATED ALWAYS AS (a * 2) STORED, CHECK (a < b))",
        );
        assert!(exprs.contains(&"7".to_string()));
        assert!(exprs.contains(&"a * 2".to_string()));
        assert!(exprs.contains(&"a < b".to_string()));
    }

    #[test]
    fn visit_alter_table_children() {
        let exprs = expressions_of("ALTER TABLE t ALTER COLUMN a SET DEFAULT 1 + 2");
        assert_eq!(exprs, vec!["1 + 2", "1", "2"]);

        let exprs = expressions_of("ALTER TABLE t ADD CONSTRAINT c CHECK (a > 0)");
        assert!(exprs.contains(&"a > 0".to_string()));

        let relations =
            relations_of("ALTER TABLE t ADD COLUMN b INT REFERENCES o (id), RENAME TO t2");
        assert_eq!(relations, vec!["t", "o", "t2"]);

        let exprs =
            expressions_of("ALTER TABLE t ALTER COLUMN a SET DATA TYPE BIGINT USING a + 0");
        assert!(exprs.contains(&"a + 0".to_string()));
    }
}
