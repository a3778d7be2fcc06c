//! # Supply Flow
//!
//! Supply-modification conservation, fee routing into the fee sink, and
//! the governance handoff that installs the supply authorities.

#[cfg(test)]
mod tests {
    use crate::integration::fixtures::World;
    use mc_actuator::{
        actuator_for, Actuator, Contract, ModifySupplyContract, ProposalCreateContract,
        ResultCode, SupplyDirection, TransactionResult, ValidationError,
    };
    use mc_governance::ProposalController;
    use mc_state::{
        AccountStore, ChainParameter, DynamicPropertiesStore, FEE_SINK_ADDRESS,
    };
    use shared_types::{Account, Address};
    use std::collections::BTreeMap;

    const TREASURY: Address = Address::repeat(0x40);
    const CUSTOMER: Address = Address::repeat(0x50);

    fn supply_contract(owner: &Address, amount: i64, direction: SupplyDirection) -> Contract {
        Contract::ModifySupply(ModifySupplyContract {
            owner_address: owner.as_bytes().to_vec(),
            customer_address: CUSTOMER.as_bytes().to_vec(),
            amount,
            direction,
        })
    }

    /// A world where the treasury holds both supply authorities.
    fn world_with_treasury() -> World {
        let mut world = World::with_witnesses(4);
        world.accounts.put(Account::with_balance(TREASURY, 10_000));
        world
            .properties
            .save_authority(ChainParameter::SupplyIncreaseAuthority, TREASURY);
        world
            .properties
            .save_authority(ChainParameter::SupplyDecreaseAuthority, TREASURY);
        world.properties.save_total_supply(1_000_000);
        world
    }

    fn run(world: &mut World, contract: Contract) -> TransactionResult {
        let actuator = actuator_for(contract);
        actuator.validate(&world.ctx()).unwrap();
        let mut result = TransactionResult::new();
        assert!(actuator.execute(&mut world.ctx(), &mut result).unwrap());
        result
    }

    #[test]
    fn test_supply_conservation_across_mint_and_burn() {
        let mut world = world_with_treasury();
        world.accounts.put(Account::with_balance(CUSTOMER, 0));

        run(
            &mut world,
            supply_contract(&TREASURY, 1_000, SupplyDirection::Increase),
        );
        run(
            &mut world,
            supply_contract(&TREASURY, 400, SupplyDirection::Decrease),
        );

        assert_eq!(world.accounts.get(&CUSTOMER).unwrap().balance, 600);
        assert_eq!(world.properties.total_supply(), 1_000_600);
        // Zero base fee: neither the treasury nor the fee sink moved.
        assert_eq!(world.accounts.get(&TREASURY).unwrap().balance, 10_000);
        assert_eq!(world.accounts.get(&FEE_SINK_ADDRESS).unwrap().balance, 0);
    }

    #[test]
    fn test_account_creation_surcharge_flows_to_fee_sink() {
        let mut world = world_with_treasury();
        world
            .properties
            .save_param(ChainParameter::CreateAccountFeeInSystemContract, 1_000);

        let result = run(
            &mut world,
            supply_contract(&TREASURY, 300, SupplyDirection::Increase),
        );

        assert_eq!(result.code, ResultCode::Success);
        assert_eq!(result.fee, 1_000);
        assert_eq!(world.accounts.get(&TREASURY).unwrap().balance, 9_000);
        assert_eq!(world.accounts.get(&FEE_SINK_ADDRESS).unwrap().balance, 1_000);
        assert_eq!(world.accounts.get(&CUSTOMER).unwrap().balance, 300);
        assert_eq!(world.properties.total_supply(), 1_000_300);
    }

    #[test]
    fn test_failed_validation_leaves_world_untouched() {
        let mut world = world_with_treasury();
        world.accounts.put(Account::with_balance(CUSTOMER, 600));

        let actuator = actuator_for(supply_contract(
            &TREASURY,
            10_000,
            SupplyDirection::Decrease,
        ));
        let err = actuator.validate(&world.ctx()).unwrap_err();
        assert!(matches!(err, ValidationError::InsufficientBalance { .. }));

        assert_eq!(world.accounts.get(&CUSTOMER).unwrap().balance, 600);
        assert_eq!(world.properties.total_supply(), 1_000_000);
    }

    #[test]
    fn test_governance_installs_authority_then_mint() {
        crate::integration::fixtures::init_tracing();
        let mut world = World::with_witnesses(4);
        world.accounts.put(Account::with_balance(TREASURY, 10_000));
        world.accounts.put(Account::with_balance(CUSTOMER, 0));
        world.properties.save_total_supply(1_000_000);

        // No authority configured yet: the mint is rejected.
        let mint = actuator_for(supply_contract(&TREASURY, 500, SupplyDirection::Increase));
        assert!(matches!(
            mint.validate(&world.ctx()).unwrap_err(),
            ValidationError::UnauthorizedSupplyChange { .. }
        ));

        // Governance installs the treasury as the increase authority.
        let actuator = actuator_for(Contract::ProposalCreate(ProposalCreateContract {
            owner_address: World::witness(1).as_bytes().to_vec(),
            parameters: [(
                ChainParameter::SupplyIncreaseAuthority.id(),
                hex::encode(TREASURY.as_bytes()),
            )]
            .into_iter()
            .collect::<BTreeMap<_, _>>(),
        }));
        actuator.validate(&world.ctx()).unwrap();
        let mut result = TransactionResult::new();
        actuator.execute(&mut world.ctx(), &mut result).unwrap();

        world.approve(1, &[1, 2, 3]);
        world.advance_to_expiration_of(1);
        ProposalController::new().process_proposals(&mut world.ctx());
        assert_eq!(
            world.properties.supply_increase_authority(),
            Some(TREASURY)
        );

        // The same mint now passes end to end.
        mint.validate(&world.ctx()).unwrap();
        let mut result = TransactionResult::new();
        assert!(mint.execute(&mut world.ctx(), &mut result).unwrap());
        assert_eq!(result.code, ResultCode::Success);
        assert_eq!(world.accounts.get(&CUSTOMER).unwrap().balance, 500);
        assert_eq!(world.properties.total_supply(), 1_000_500);
    }
}
