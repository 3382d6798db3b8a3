//! Account entity, hierarchy rules, and management operations

use uuid::Uuid;

use crate::traits::AccountRepository;
use crate::types::{AccountType, DomainError, InvalidOperation, LedgerResult, NonBlankString};

/// One node in a tenant's chart of accounts
///
/// Every field is fixed at construction except `children`, which grows only
/// through [`Account::add_child`]. The children list is an in-memory
/// convenience for display; storage derives the hierarchy from `parent_id`.
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    id: Uuid,
    tenant_id: Uuid,
    parent_id: Option<Uuid>,
    code: NonBlankString,
    name: NonBlankString,
    account_type: AccountType,
    children: Vec<Account>,
}

impl Account {
    /// Creates an account; name and code must both be non-blank.
    pub fn new(
        id: Uuid,
        tenant_id: Uuid,
        code: impl Into<String>,
        name: impl Into<String>,
        account_type: AccountType,
        parent_id: Option<Uuid>,
    ) -> Result<Self, DomainError> {
        let name =
            NonBlankString::new(name).map_err(|_| DomainError::EmptyName("Account"))?;
        let code =
            NonBlankString::new(code).map_err(|_| DomainError::EmptyCode("Account"))?;

        Ok(Self {
            id,
            tenant_id,
            parent_id,
            code,
            name,
            account_type,
            children: Vec::new(),
        })
    }

    /// Appends `child` to this account's children.
    ///
    /// Checks run in order and the first failure wins: the child must belong
    /// to the same tenant, must name this account as its parent, and must
    /// not itself be this account's parent (depth-1 cycle guard only -
    /// deeper cycles are not traversed).
    pub fn add_child(&mut self, child: Account) -> Result<(), InvalidOperation> {
        if child.tenant_id != self.tenant_id {
            return Err(InvalidOperation::CrossTenantChild);
        }

        if child.parent_id != Some(self.id) {
            return Err(InvalidOperation::WrongParentLink);
        }

        if self.parent_id == Some(child.id) {
            return Err(InvalidOperation::CircularReference);
        }

        self.children.push(child);
        Ok(())
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn tenant_id(&self) -> Uuid {
        self.tenant_id
    }

    pub fn parent_id(&self) -> Option<Uuid> {
        self.parent_id
    }

    pub fn code(&self) -> &str {
        self.code.as_str()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn account_type(&self) -> AccountType {
        self.account_type
    }

    pub fn children(&self) -> &[Account] {
        &self.children
    }
}

/// Account manager for chart-of-accounts operations
pub struct AccountManager<R: AccountRepository> {
    repository: R,
}

impl<R: AccountRepository> AccountManager<R> {
    /// Create a new account manager over the given repository
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// Create a new account for a tenant.
    ///
    /// When a parent is given it must already exist and belong to the same
    /// tenant.
    pub async fn create_account(
        &mut self,
        tenant_id: Uuid,
        code: impl Into<String>,
        name: impl Into<String>,
        account_type: AccountType,
        parent_id: Option<Uuid>,
    ) -> LedgerResult<Account> {
        let account = Account::new(
            Uuid::new_v4(),
            tenant_id,
            code,
            name,
            account_type,
            parent_id,
        )?;

        if let Some(parent_id) = parent_id {
            let parent = self
                .repository
                .get_account(parent_id)
                .await?
                .ok_or(InvalidOperation::AccountNotFound(parent_id))?;

            if parent.tenant_id() != tenant_id {
                return Err(InvalidOperation::CrossTenantChild.into());
            }
        }

        self.repository.add_account(&account).await?;
        tracing::debug!(
            account_id = %account.id(),
            tenant_id = %tenant_id,
            code = account.code(),
            "account created"
        );

        Ok(account)
    }

    /// Get an account by id
    pub async fn get_account(&self, id: Uuid) -> LedgerResult<Option<Account>> {
        self.repository.get_account(id).await
    }

    /// List all accounts belonging to a tenant
    pub async fn list_accounts(&self, tenant_id: Uuid) -> LedgerResult<Vec<Account>> {
        self.repository.get_accounts_by_tenant(tenant_id).await
    }

    /// Load the stored direct children of `parent` and link them in place.
    ///
    /// Returns the number of children attached. Only one level is linked;
    /// grandchildren stay where they are.
    pub async fn load_children(&self, parent: &mut Account) -> LedgerResult<usize> {
        let accounts = self
            .repository
            .get_accounts_by_tenant(parent.tenant_id())
            .await?;

        let mut attached = 0;
        for account in accounts {
            if account.parent_id() == Some(parent.id()) {
                parent.add_child(account)?;
                attached += 1;
            }
        }

        Ok(attached)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn account(
        id: Uuid,
        tenant_id: Uuid,
        code: &str,
        parent_id: Option<Uuid>,
    ) -> Account {
        Account::new(id, tenant_id, code, "Some Account", AccountType::Asset, parent_id).unwrap()
    }

    #[test]
    fn blank_name_is_rejected_before_code() {
        let err = Account::new(
            Uuid::new_v4(),
            Uuid::new_v4(),
            "",
            "",
            AccountType::Asset,
            None,
        )
        .unwrap_err();
        assert_eq!(err, DomainError::EmptyName("Account"));
        assert_eq!(err.to_string(), "Account Name cannot be empty.");
    }

    #[test]
    fn blank_code_is_rejected() {
        let err = Account::new(
            Uuid::new_v4(),
            Uuid::new_v4(),
            "  ",
            "Cash",
            AccountType::Asset,
            None,
        )
        .unwrap_err();
        assert_eq!(err, DomainError::EmptyCode("Account"));
        assert_eq!(err.to_string(), "Account Code cannot be empty.");
    }

    #[test]
    fn add_child_links_a_well_formed_child() {
        let tenant_id = Uuid::new_v4();
        let parent_id = Uuid::new_v4();
        let mut parent = account(parent_id, tenant_id, "1000", None);
        let child = account(Uuid::new_v4(), tenant_id, "1010", Some(parent_id));

        parent.add_child(child).unwrap();
        assert_eq!(parent.children().len(), 1);
        assert_eq!(parent.children()[0].code(), "1010");
    }

    #[test]
    fn add_child_rejects_other_tenants_first() {
        let parent_id = Uuid::new_v4();
        let mut parent = account(parent_id, Uuid::new_v4(), "1000", None);
        // Wrong tenant AND wrong parent link; the tenant check must win.
        let child = account(Uuid::new_v4(), Uuid::new_v4(), "1010", None);

        let err = parent.add_child(child).unwrap_err();
        assert_eq!(err, InvalidOperation::CrossTenantChild);
        assert!(parent.children().is_empty());
    }

    #[test]
    fn add_child_rejects_missing_or_mismatched_parent_link() {
        let tenant_id = Uuid::new_v4();
        let mut parent = account(Uuid::new_v4(), tenant_id, "1000", None);

        let orphan = account(Uuid::new_v4(), tenant_id, "1010", None);
        assert_eq!(
            parent.add_child(orphan).unwrap_err(),
            InvalidOperation::WrongParentLink
        );

        let misparented = account(Uuid::new_v4(), tenant_id, "1020", Some(Uuid::new_v4()));
        assert_eq!(
            parent.add_child(misparented).unwrap_err(),
            InvalidOperation::WrongParentLink
        );
        assert!(parent.children().is_empty());
    }

    #[test]
    fn add_child_rejects_own_parent_as_child() {
        let tenant_id = Uuid::new_v4();
        let a_id = Uuid::new_v4();
        let b_id = Uuid::new_v4();

        // A claims B as parent, B claims A as parent.
        let a = account(a_id, tenant_id, "1000", Some(b_id));
        let mut b = account(b_id, tenant_id, "1010", Some(a_id));

        let err = b.add_child(a).unwrap_err();
        assert_eq!(err, InvalidOperation::CircularReference);
        assert_eq!(
            err.to_string(),
            "Cannot add parent account as a child (circular reference)."
        );
        assert!(b.children().is_empty());
    }
}
