//! # Governance Flow
//!
//! End-to-end proposal lifecycle: creation through the actuator engine,
//! witness approvals, and resolution at the maintenance boundary.

#[cfg(test)]
mod tests {
    use crate::integration::fixtures::World;
    use mc_actuator::{
        actuator_for, Actuator, Contract, ProposalCreateContract, ResultCode, TransactionResult,
        ValidationError,
    };
    use mc_governance::ProposalController;
    use mc_state::{
        AccountStore, DynamicPropertiesStore, ProposalState, ProposalStore,
    };
    use shared_types::{Account, Address};
    use std::collections::BTreeMap;

    fn proposal_contract(proposer: &Address, parameters: &[(u32, &str)]) -> Contract {
        Contract::ProposalCreate(ProposalCreateContract {
            owner_address: proposer.as_bytes().to_vec(),
            parameters: parameters
                .iter()
                .map(|(id, value)| (*id, (*value).to_string()))
                .collect::<BTreeMap<_, _>>(),
        })
    }

    fn create_proposal(world: &mut World, proposer: &Address, parameters: &[(u32, &str)]) -> u64 {
        let actuator = actuator_for(proposal_contract(proposer, parameters));
        actuator.validate(&world.ctx()).unwrap();
        let mut result = TransactionResult::new();
        assert!(actuator.execute(&mut world.ctx(), &mut result).unwrap());
        assert_eq!(result.code, ResultCode::Success);
        world.properties.latest_proposal_num()
    }

    #[test]
    fn test_proposal_lifecycle_applies_parameter() {
        crate::integration::fixtures::init_tracing();
        let mut world = World::with_witnesses(4);
        let id = create_proposal(&mut world, &World::witness(1), &[(0, "100000")]);
        assert_eq!(id, 1);
        assert_eq!(
            world.proposals.get(id).unwrap().unwrap().state,
            ProposalState::Pending
        );

        world.approve(id, &[1, 2, 3]);
        world.advance_to_expiration_of(id);
        ProposalController::new().process_proposals(&mut world.ctx());

        assert_eq!(
            world.proposals.get(id).unwrap().unwrap().state,
            ProposalState::Approved
        );
        assert_eq!(world.properties.maintenance_interval(), 100_000);
    }

    #[test]
    fn test_minority_approval_leaves_parameter_at_default() {
        let mut world = World::with_witnesses(4);
        let id = create_proposal(&mut world, &World::witness(1), &[(0, "100000")]);

        // 2 of 4 is not a strict majority.
        world.approve(id, &[1, 2]);
        world.advance_to_expiration_of(id);
        ProposalController::new().process_proposals(&mut world.ctx());

        assert_eq!(
            world.proposals.get(id).unwrap().unwrap().state,
            ProposalState::Disapproved
        );
        assert_eq!(world.properties.maintenance_interval(), 21_600_000);
    }

    #[test]
    fn test_expiration_lands_on_maintenance_boundary() {
        // Head at 0, first boundary at 21_600_000, window 259_200_000: the
        // first boundary after the window closes is 280_800_000.
        let mut world = World::with_witnesses(4);
        let id = create_proposal(&mut world, &World::witness(1), &[(3, "10")]);

        let proposal = world.proposals.get(id).unwrap().unwrap();
        assert_eq!(proposal.expiration_time, 280_800_000);
        assert_eq!(
            proposal.expiration_time % world.properties.maintenance_interval(),
            0
        );
    }

    #[test]
    fn test_sequential_proposals_resolved_in_one_pass() {
        let mut world = World::with_witnesses(4);
        let first = create_proposal(&mut world, &World::witness(1), &[(3, "10")]);
        let second = create_proposal(&mut world, &World::witness(2), &[(4, "20")]);
        assert_eq!((first, second), (1, 2));

        world.approve(first, &[1, 2, 3]);
        world.approve(second, &[2, 3]);
        world.advance_to_expiration_of(second);
        ProposalController::new().process_proposals(&mut world.ctx());

        assert_eq!(
            world.proposals.get(first).unwrap().unwrap().state,
            ProposalState::Approved
        );
        assert_eq!(
            world.proposals.get(second).unwrap().unwrap().state,
            ProposalState::Disapproved
        );
    }

    #[test]
    fn test_non_witness_cannot_propose() {
        let mut world = World::with_witnesses(4);
        let outsider = Address::repeat(9);
        world.accounts.put(Account::with_balance(outsider, 1_000));

        let actuator = actuator_for(proposal_contract(&outsider, &[(0, "100000")]));
        let err = actuator.validate(&world.ctx()).unwrap_err();
        assert!(matches!(err, ValidationError::WitnessNotFound { .. }));
        assert_eq!(world.properties.latest_proposal_num(), 0);
    }

    #[test]
    fn test_rule_violation_rejected_at_creation() {
        // 80_999 is below the maintenance-interval floor of 81_000.
        let mut world = World::with_witnesses(4);
        let actuator = actuator_for(proposal_contract(&World::witness(1), &[(0, "80999")]));
        let err = actuator.validate(&world.ctx()).unwrap_err();
        assert!(matches!(err, ValidationError::Param(_)));
        assert_eq!(world.properties.latest_proposal_num(), 0);
    }
}
