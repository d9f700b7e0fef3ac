use {
    crate::error::AnteError,
    vrn_interface::{Msg, Tx, TxContext},
};

/// One gate of the admission pipeline.
///
/// A gate either returns an error, rejecting the transaction before any later
/// gate runs, or forwards to `next` with a possibly-modified context.
pub trait AnteDecorator {
    fn ante_handle(
        &self,
        ctx: TxContext,
        tx: &Tx,
        simulate: bool,
        next: Next<'_>,
    ) -> Result<TxContext, AnteError>;
}

impl<F> AnteDecorator for F
where
    F: Fn(TxContext, &Tx, bool, Next<'_>) -> Result<TxContext, AnteError>,
{
    fn ante_handle(
        &self,
        ctx: TxContext,
        tx: &Tx,
        simulate: bool,
        next: Next<'_>,
    ) -> Result<TxContext, AnteError> {
        self(ctx, tx, simulate, next)
    }
}

/// Box a closure as a decorator.
pub fn decorator_fn<'a, F>(f: F) -> Box<dyn AnteDecorator + 'a>
where
    F: Fn(TxContext, &Tx, bool, Next<'_>) -> Result<TxContext, AnteError> + 'a,
{
    Box::new(f)
}

/// The remainder of the chain after the current gate.
#[derive(Clone, Copy)]
pub struct Next<'a> {
    rest: &'a [Box<dyn AnteDecorator + 'a>],
}

impl<'a> Next<'a> {
    pub fn new(chain: &'a [Box<dyn AnteDecorator + 'a>]) -> Self {
        Self { rest: chain }
    }

    /// Run the next gate, or accept the context when the chain is exhausted.
    pub fn run(self, ctx: TxContext, tx: &Tx, simulate: bool) -> Result<TxContext, AnteError> {
        match self.rest.split_first() {
            Some((decorator, rest)) => decorator.ante_handle(ctx, tx, simulate, Next { rest }),
            None => Ok(ctx),
        }
    }
}

/// A per-message admission check.
///
/// Implemented by the gates that judge individual messages so they can run
/// either as standalone decorators or interleaved in
/// [`MessageGates`](crate::MessageGates).
pub trait MsgGate {
    fn check_msg(&self, ctx: &TxContext, msg: &Msg) -> Result<(), AnteError>;
}

/// Check every message of `tx` in order, then continue the chain.
pub(crate) fn run_msg_gate(
    gate: &dyn MsgGate,
    ctx: TxContext,
    tx: &Tx,
    simulate: bool,
    next: Next<'_>,
) -> Result<TxContext, AnteError> {
    for msg in &tx.msgs {
        gate.check_msg(&ctx, msg)?;
    }
    next.run(ctx, tx, simulate)
}
