//! Read-only views over fetched program accounts.
//!
//! Callers pass the `(address, data)` pairs returned by an account fetch or a
//! program-accounts scan. Only committed state is ever visible this way.

use anchor_lang::prelude::*;

use crate::error::TerrafundError;
use crate::pda;
use crate::state::{Campaign, ProgramState, Transaction};

/// Which receipts to return for a campaign
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransactionFilter {
    All,
    /// `credited == true`
    Donations,
    /// `credited == false`
    Withdrawals,
}

impl TransactionFilter {
    pub fn matches(&self, transaction: &Transaction) -> bool {
        match self {
            TransactionFilter::All => true,
            TransactionFilter::Donations => transaction.credited,
            TransactionFilter::Withdrawals => !transaction.credited,
        }
    }
}

pub fn program_state(program_id: &Pubkey, accounts: &[(Pubkey, Vec<u8>)]) -> Result<ProgramState> {
    let (address, _) = pda::program_state_address(program_id)?;
    load(accounts, &address)
}

/// Fetches a campaign by id; `NotFound` if nothing lives at its derived address.
pub fn campaign(
    program_id: &Pubkey,
    accounts: &[(Pubkey, Vec<u8>)],
    campaign_id: u64,
) -> Result<Campaign> {
    let (address, _) = pda::campaign_address(program_id, campaign_id)?;
    load(accounts, &address)
}

/// Receipts belonging to one campaign, ordered by time then sequence.
///
/// A receipt is only returned when it lives at the address derived from its
/// own owner, campaign id and sequence, so records planted elsewhere are ignored.
pub fn transactions(
    program_id: &Pubkey,
    accounts: &[(Pubkey, Vec<u8>)],
    campaign_id: u64,
    filter: TransactionFilter,
) -> Result<Vec<(Pubkey, Transaction)>> {
    let mut receipts = Vec::new();
    for (address, tx) in decode_all::<Transaction>(accounts) {
        if tx.campaign_id != campaign_id || !filter.matches(&tx) {
            continue;
        }
        if address == receipt_address(program_id, &tx)? {
            receipts.push((address, tx));
        }
    }
    receipts.sort_by_key(|(_, tx)| (tx.timestamp, tx.sequence));
    Ok(receipts)
}

fn receipt_address(program_id: &Pubkey, tx: &Transaction) -> Result<Pubkey> {
    let (address, _) = if tx.credited {
        pda::donation_address(program_id, &tx.owner, tx.campaign_id, tx.sequence)?
    } else {
        pda::withdrawal_address(program_id, &tx.owner, tx.campaign_id, tx.sequence)?
    };
    Ok(address)
}

pub fn active_campaigns(accounts: &[(Pubkey, Vec<u8>)]) -> Vec<Campaign> {
    sorted_campaigns(accounts, |campaign| campaign.active)
}

/// All campaigns created by `creator`, deleted ones included
pub fn campaigns_by_creator(accounts: &[(Pubkey, Vec<u8>)], creator: &Pubkey) -> Vec<Campaign> {
    sorted_campaigns(accounts, |campaign| campaign.creator == *creator)
}

fn sorted_campaigns(
    accounts: &[(Pubkey, Vec<u8>)],
    keep: impl Fn(&Campaign) -> bool,
) -> Vec<Campaign> {
    let mut campaigns: Vec<Campaign> = decode_all::<Campaign>(accounts)
        .map(|(_, campaign)| campaign)
        .filter(|campaign| keep(campaign))
        .collect();
    campaigns.sort_by_key(|campaign| campaign.id);
    campaigns
}

fn load<T: AccountDeserialize>(accounts: &[(Pubkey, Vec<u8>)], address: &Pubkey) -> Result<T> {
    let (_, data) = accounts
        .iter()
        .find(|(key, _)| key == address)
        .ok_or(TerrafundError::NotFound)?;
    T::try_deserialize(&mut data.as_slice())
}

/// Decodes every account of type `T`, skipping accounts of other types
fn decode_all<T: AccountDeserialize>(
    accounts: &[(Pubkey, Vec<u8>)],
) -> impl Iterator<Item = (Pubkey, T)> + '_ {
    accounts.iter().filter_map(|(address, data)| {
        T::try_deserialize(&mut data.as_slice())
            .ok()
            .map(|decoded| (*address, decoded))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use anchor_lang::error::Error;

    fn encode<T: AccountSerialize>(address: Pubkey, value: &T) -> (Pubkey, Vec<u8>) {
        let mut data = Vec::new();
        value.try_serialize(&mut data).unwrap();
        (address, data)
    }

    fn campaign_record(id: u64, creator: Pubkey, active: bool) -> Campaign {
        Campaign {
            id,
            creator,
            title: format!("Campaign {id}"),
            goal: 1_000,
            active,
            ..Campaign::default()
        }
    }

    fn snapshot(creator: Pubkey, donor: Pubkey) -> Vec<(Pubkey, Vec<u8>)> {
        let program_id = crate::ID;
        let state = ProgramState {
            initialized: true,
            campaign_count: 3,
            platform_fee_percent: 10,
            platform_fee_recipient: creator,
            bump: 1,
        };

        let mut accounts = vec![encode(pda::program_state_address(&program_id).unwrap().0, &state)];
        for (id, active) in [(1, true), (2, false), (3, true)] {
            let owner = if id == 3 { donor } else { creator };
            accounts.push(encode(
                pda::campaign_address(&program_id, id).unwrap().0,
                &campaign_record(id, owner, active),
            ));
        }

        let receipts = [
            Transaction::donation(1, donor, 600, 1, 100, 0),
            Transaction::withdrawal(1, creator, 500, 1, 200, 0),
            Transaction::donation(1, donor, 50, 2, 300, 0),
            Transaction::donation(3, creator, 70, 1, 150, 0),
        ];
        for receipt in receipts {
            let address = if receipt.credited {
                pda::donation_address(&program_id, &receipt.owner, receipt.campaign_id, receipt.sequence)
            } else {
                pda::withdrawal_address(&program_id, &receipt.owner, receipt.campaign_id, receipt.sequence)
            };
            accounts.push(encode(address.unwrap().0, &receipt));
        }
        accounts
    }

    #[test]
    fn reads_program_state_and_campaign_by_id() {
        let creator = Pubkey::new_unique();
        let accounts = snapshot(creator, Pubkey::new_unique());

        let state = program_state(&crate::ID, &accounts).unwrap();
        assert_eq!(state.campaign_count, 3);
        assert_eq!(state.platform_fee_recipient, creator);

        let found = campaign(&crate::ID, &accounts, 2).unwrap();
        assert_eq!(found, campaign_record(2, creator, false));
    }

    #[test]
    fn missing_records_are_not_found() {
        let accounts = snapshot(Pubkey::new_unique(), Pubkey::new_unique());

        assert_eq!(
            campaign(&crate::ID, &accounts, 4).unwrap_err(),
            Error::from(TerrafundError::NotFound)
        );
        assert_eq!(
            program_state(&crate::ID, &[]).unwrap_err(),
            Error::from(TerrafundError::NotFound)
        );
    }

    #[test]
    fn wrong_account_type_at_address_fails_to_decode() {
        let creator = Pubkey::new_unique();
        let address = pda::campaign_address(&crate::ID, 1).unwrap().0;
        let receipt = Transaction::donation(1, creator, 5, 1, 0, 0);
        let accounts = vec![encode(address, &receipt)];

        assert!(campaign(&crate::ID, &accounts, 1).is_err());
    }

    #[test]
    fn transactions_filter_by_campaign_and_direction() {
        let creator = Pubkey::new_unique();
        let donor = Pubkey::new_unique();
        let accounts = snapshot(creator, donor);

        let all = transactions(&crate::ID, &accounts, 1, TransactionFilter::All).unwrap();
        let amounts: Vec<u64> = all.iter().map(|(_, tx)| tx.amount).collect();
        assert_eq!(amounts, vec![600, 500, 50]);

        let donations =
            transactions(&crate::ID, &accounts, 1, TransactionFilter::Donations).unwrap();
        assert_eq!(donations.len(), 2);
        assert!(donations.iter().all(|(_, tx)| tx.credited && tx.owner == donor));
        assert_eq!(
            donations[0].0,
            pda::donation_address(&crate::ID, &donor, 1, 1).unwrap().0
        );

        let withdrawals =
            transactions(&crate::ID, &accounts, 1, TransactionFilter::Withdrawals).unwrap();
        assert_eq!(withdrawals.len(), 1);
        assert_eq!(withdrawals[0].1.owner, creator);
        assert!(!withdrawals[0].1.credited);

        assert!(transactions(&crate::ID, &accounts, 2, TransactionFilter::All)
            .unwrap()
            .is_empty());
    }

    #[test]
    fn receipts_away_from_their_derived_address_are_ignored() {
        let creator = Pubkey::new_unique();
        let donor = Pubkey::new_unique();
        let mut accounts = snapshot(creator, donor);

        // Same fields as the genuine sequence-1 donation, stored somewhere else
        let planted = Transaction::donation(1, donor, 600, 1, 100, 0);
        accounts.push(encode(Pubkey::new_unique(), &planted));
        // Claims sequence 9, but sits at the sequence-2 withdrawal address
        let relabelled = Transaction::withdrawal(1, creator, 9_999, 9, 250, 0);
        accounts.push(encode(
            pda::withdrawal_address(&crate::ID, &creator, 1, 2).unwrap().0,
            &relabelled,
        ));

        let all = transactions(&crate::ID, &accounts, 1, TransactionFilter::All).unwrap();
        let amounts: Vec<u64> = all.iter().map(|(_, tx)| tx.amount).collect();
        assert_eq!(amounts, vec![600, 500, 50]);

        // Receipts derived under a different program id are not ours
        let other_program = Pubkey::new_unique();
        assert!(transactions(&other_program, &accounts, 1, TransactionFilter::All)
            .unwrap()
            .is_empty());
    }

    #[test]
    fn campaign_listings() {
        let creator = Pubkey::new_unique();
        let donor = Pubkey::new_unique();
        let accounts = snapshot(creator, donor);

        let active: Vec<u64> = active_campaigns(&accounts).iter().map(|c| c.id).collect();
        assert_eq!(active, vec![1, 3]);

        let mine: Vec<u64> = campaigns_by_creator(&accounts, &creator)
            .iter()
            .map(|c| c.id)
            .collect();
        assert_eq!(mine, vec![1, 2]);
    }
}
