use {
    crate::{
        decorator::{AnteDecorator, MsgGate, Next},
        error::AnteError,
        group_proposal_timing::GroupProposalTimingDecorator,
        validator_whitelist::ValidatorWhitelistDecorator,
    },
    log::*,
    vrn_interface::{GroupKeeper, Tx, TxContext, ValidatorWhitelist},
};

/// Collaborators and external stages needed to assemble the pipeline.
/// Every field is required.
#[derive(Default)]
pub struct HandlerOptions<'a> {
    pub setup_context: Option<Box<dyn AnteDecorator + 'a>>,
    pub validate_basic: Option<Box<dyn AnteDecorator + 'a>>,
    pub group_keeper: Option<&'a dyn GroupKeeper>,
    pub validator_whitelist: Option<&'a dyn ValidatorWhitelist>,
    pub deduct_fee: Option<Box<dyn AnteDecorator + 'a>>,
    pub increment_sequence: Option<Box<dyn AnteDecorator + 'a>>,
}

/// Runs several per-message gates over each message in transaction order,
/// so the earliest violating message decides the rejection regardless of
/// which gate catches it.
pub struct MessageGates<'a> {
    gates: Vec<Box<dyn MsgGate + 'a>>,
}

impl<'a> MessageGates<'a> {
    pub fn new(gates: Vec<Box<dyn MsgGate + 'a>>) -> Self {
        Self { gates }
    }
}

impl AnteDecorator for MessageGates<'_> {
    fn ante_handle(
        &self,
        ctx: TxContext,
        tx: &Tx,
        simulate: bool,
        next: Next<'_>,
    ) -> Result<TxContext, AnteError> {
        for msg in &tx.msgs {
            for gate in &self.gates {
                gate.check_msg(&ctx, msg)?;
            }
        }
        next.run(ctx, tx, simulate)
    }
}

/// The assembled admission chain.
pub struct AnteHandler<'a> {
    decorators: Vec<Box<dyn AnteDecorator + 'a>>,
}

impl std::fmt::Debug for AnteHandler<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnteHandler")
            .field("decorators", &self.decorators.len())
            .finish()
    }
}

impl<'a> AnteHandler<'a> {
    /// A handler over an arbitrary chain, in the given order.
    pub fn from_decorators(decorators: Vec<Box<dyn AnteDecorator + 'a>>) -> Self {
        Self { decorators }
    }

    pub fn len(&self) -> usize {
        self.decorators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.decorators.is_empty()
    }

    pub fn handle(
        &self,
        ctx: TxContext,
        tx: &Tx,
        simulate: bool,
    ) -> Result<TxContext, AnteError> {
        let height = ctx.block.height;
        Next::new(&self.decorators)
            .run(ctx, tx, simulate)
            .inspect_err(|err| {
                debug!(
                    "ante: rejected tx at height {height} with code {}: {err}",
                    err.code().as_u32()
                );
            })
    }
}

/// Assemble the fixed pipeline:
///
/// 1. context setup
/// 2. basic validation
/// 3. proposal timing and 4. validator whitelist, interleaved per message
/// 5. fee deduction
/// 6. sequence increment
pub fn new_ante_handler(options: HandlerOptions<'_>) -> Result<AnteHandler<'_>, AnteError> {
    let HandlerOptions {
        setup_context,
        validate_basic,
        group_keeper,
        validator_whitelist,
        deduct_fee,
        increment_sequence,
    } = options;

    let missing = |option: &'static str| AnteError::MissingHandlerOption { option };
    let setup_context = setup_context.ok_or_else(|| missing("setup context decorator"))?;
    let validate_basic = validate_basic.ok_or_else(|| missing("validate basic decorator"))?;
    let group_keeper = group_keeper.ok_or_else(|| missing("group keeper"))?;
    let validator_whitelist =
        validator_whitelist.ok_or_else(|| missing("validator whitelist"))?;
    let deduct_fee = deduct_fee.ok_or_else(|| missing("deduct fee decorator"))?;
    let increment_sequence =
        increment_sequence.ok_or_else(|| missing("increment sequence decorator"))?;

    let message_gates = MessageGates::new(vec![
        Box::new(GroupProposalTimingDecorator::new(group_keeper)),
        Box::new(ValidatorWhitelistDecorator::new(validator_whitelist)),
    ]);

    Ok(AnteHandler::from_decorators(vec![
        setup_context,
        validate_basic,
        Box::new(message_gates),
        deduct_fee,
        increment_sequence,
    ]))
}
