#![allow(dead_code)]

//! In-memory [`PlanStore`] for view-model tests.
//!
//! Mirrors the server's observable rules: joined names at read time,
//! `prazo_fim DESC` ordering, refused deletes of referenced parents and
//! write stamping. Individual operations can be made to fail, and a hook can
//! run while a call is "in flight".

use std::collections::HashSet;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use plano_client::error::StoreError;
use plano_client::records::{PlanoAnual, Regional, Responsavel, Session, User};
use plano_client::store::PlanStore;
use plano_core::filter::PlanoFilter;
use plano_core::payload::{PlanoPayload, RegionalPayload, ResponsavelPayload};
use plano_core::status::PlanoStatus;
use plano_core::types::DbId;

pub const EMAIL: &str = "gestor@plano.gov";
pub const PASSWORD: &str = "senha-segura";

type Hook = Box<dyn FnOnce() + Send>;

#[derive(Default)]
struct Data {
    next_id: DbId,
    accounts: Vec<(String, String, User)>,
    actor: Option<User>,
    regionais: Vec<Regional>,
    responsaveis: Vec<Responsavel>,
    planos: Vec<PlanoAnual>,
}

impl Data {
    fn next_id(&mut self) -> DbId {
        self.next_id += 1;
        self.next_id
    }

    fn regional_name(&self, id: DbId) -> Option<String> {
        self.regionais
            .iter()
            .find(|r| r.id == id)
            .map(|r| r.nome_regional.clone())
    }

    fn responsavel_name(&self, id: DbId) -> Option<String> {
        self.responsaveis
            .iter()
            .find(|r| r.id == id)
            .map(|r| r.nome_responsavel.clone())
    }

    fn actor_id(&self) -> Option<DbId> {
        self.actor.as_ref().map(|u| u.id)
    }

    /// Re-resolve parent names the way a read-time join would.
    fn joined_responsavel(&self, row: &Responsavel) -> Responsavel {
        Responsavel {
            nome_regional: self.regional_name(row.regional_id).unwrap_or_default(),
            ..row.clone()
        }
    }

    fn joined_plano(&self, row: &PlanoAnual) -> PlanoAnual {
        PlanoAnual {
            nome_regional: self.regional_name(row.regional_id).unwrap_or_default(),
            nome_responsavel: self.responsavel_name(row.responsavel_id).unwrap_or_default(),
            ..row.clone()
        }
    }
}

pub struct FakeStore {
    data: Mutex<Data>,
    calls: Mutex<Vec<&'static str>>,
    failing: Mutex<HashSet<&'static str>>,
    rejecting: Mutex<HashSet<&'static str>>,
    hook: Mutex<Option<(&'static str, Hook)>>,
}

impl Default for FakeStore {
    fn default() -> Self {
        let mut data = Data::default();
        let id = data.next_id();
        data.accounts.push((
            EMAIL.to_string(),
            PASSWORD.to_string(),
            User {
                id,
                email: EMAIL.to_string(),
            },
        ));
        Self {
            data: Mutex::new(data),
            calls: Mutex::new(Vec::new()),
            failing: Mutex::new(HashSet::new()),
            rejecting: Mutex::new(HashSet::new()),
            hook: Mutex::new(None),
        }
    }
}

fn transport_failure() -> StoreError {
    StoreError::Api {
        status: 503,
        code: "UNAVAILABLE".into(),
        message: "store unavailable".into(),
    }
}

fn not_found() -> StoreError {
    StoreError::Api {
        status: 404,
        code: "NOT_FOUND".into(),
        message: "not found".into(),
    }
}

fn invalid_reference() -> StoreError {
    StoreError::Api {
        status: 400,
        code: "INVALID_REFERENCE".into(),
        message: "referenced record does not exist".into(),
    }
}

pub fn date(month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, month, day).unwrap()
}

impl FakeStore {
    /// A store with a signed-in actor.
    pub fn signed_in() -> Self {
        let store = Self::default();
        {
            let mut data = store.data.lock().unwrap();
            data.actor = Some(data.accounts[0].2.clone());
        }
        store
    }

    // ---- knobs ----

    pub fn fail(&self, op: &'static str) {
        self.failing.lock().unwrap().insert(op);
    }

    /// Answer `op` as if the session had lapsed at the store.
    pub fn reject(&self, op: &'static str) {
        self.rejecting.lock().unwrap().insert(op);
    }

    pub fn recover(&self, op: &'static str) {
        self.failing.lock().unwrap().remove(op);
        self.rejecting.lock().unwrap().remove(op);
    }

    /// Run `hook` during the next call to `op`, before it answers.
    pub fn during_next(&self, op: &'static str, hook: impl FnOnce() + Send + 'static) {
        *self.hook.lock().unwrap() = Some((op, Box::new(hook)));
    }

    pub fn calls(&self, op: &str) -> usize {
        self.calls.lock().unwrap().iter().filter(|c| **c == op).count()
    }

    pub fn total_calls(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn actor(&self) -> Option<User> {
        self.data.lock().unwrap().actor.clone()
    }

    fn enter(&self, op: &'static str) -> Result<(), StoreError> {
        self.calls.lock().unwrap().push(op);

        let hook = {
            let mut slot = self.hook.lock().unwrap();
            match slot.take() {
                Some((target, hook)) if target == op => Some(hook),
                other => {
                    *slot = other;
                    None
                }
            }
        };
        if let Some(hook) = hook {
            hook();
        }

        if self.failing.lock().unwrap().contains(op) {
            return Err(transport_failure());
        }
        if self.rejecting.lock().unwrap().contains(op) {
            return Err(StoreError::Unauthorized("Invalid or expired token".into()));
        }
        Ok(())
    }

    // ---- seeding (bypasses call accounting) ----

    pub fn seed_regional(&self, nome: &str) -> DbId {
        let mut data = self.data.lock().unwrap();
        let id = data.next_id();
        let created_by = data.actor_id();
        data.regionais.push(Regional {
            id,
            nome_regional: nome.to_string(),
            created_at: Utc::now(),
            created_by,
        });
        id
    }

    pub fn seed_responsavel(&self, nome: &str, regional_id: DbId) -> DbId {
        let mut data = self.data.lock().unwrap();
        let id = data.next_id();
        let created_by = data.actor_id();
        data.responsaveis.push(Responsavel {
            id,
            nome_responsavel: nome.to_string(),
            regional_id,
            nome_regional: String::new(),
            created_at: Utc::now(),
            created_by,
        });
        id
    }

    pub fn seed_plano(
        &self,
        regional_id: DbId,
        responsavel_id: DbId,
        acao: &str,
        prazo_fim: NaiveDate,
        status: PlanoStatus,
    ) -> DbId {
        let payload = PlanoPayload {
            regional_id,
            responsavel_id,
            acao: acao.to_string(),
            descricao: None,
            objetivo: None,
            prazo_inicio: date(1, 1),
            prazo_fim,
            status,
            observacoes: None,
        };
        let mut data = self.data.lock().unwrap();
        insert_plano(&mut data, &payload).id
    }

    pub fn plano(&self, id: DbId) -> Option<PlanoAnual> {
        let data = self.data.lock().unwrap();
        data.planos.iter().find(|p| p.id == id).map(|p| data.joined_plano(p))
    }

    pub fn regional_count(&self) -> usize {
        self.data.lock().unwrap().regionais.len()
    }
}

fn insert_plano(data: &mut Data, input: &PlanoPayload) -> PlanoAnual {
    let id = data.next_id();
    let now = Utc::now();
    let row = PlanoAnual {
        id,
        regional_id: input.regional_id,
        responsavel_id: input.responsavel_id,
        acao: input.acao.clone(),
        descricao: input.descricao.clone(),
        objetivo: input.objetivo.clone(),
        prazo_inicio: input.prazo_inicio,
        prazo_fim: input.prazo_fim,
        status: input.status,
        observacoes: input.observacoes.clone(),
        data_atualizacao: now,
        created_at: now,
        created_by: data.actor_id(),
        nome_regional: String::new(),
        nome_responsavel: String::new(),
    };
    data.planos.push(row.clone());
    data.joined_plano(&row)
}

fn session_for(user: &User) -> Session {
    Session {
        access_token: format!("access-{}", user.id),
        refresh_token: format!("refresh-{}", user.id),
        expires_in: 3600,
        user: user.clone(),
    }
}

#[async_trait]
impl PlanStore for FakeStore {
    async fn sign_in(&self, email: &str, password: &str) -> Result<Session, StoreError> {
        self.enter("sign_in")?;
        let mut data = self.data.lock().unwrap();
        let user = data
            .accounts
            .iter()
            .find(|(e, p, _)| e == email && p == password)
            .map(|(_, _, u)| u.clone())
            .ok_or_else(|| StoreError::Unauthorized("Invalid email or password".into()))?;
        data.actor = Some(user.clone());
        Ok(session_for(&user))
    }

    async fn sign_up(&self, email: &str, password: &str) -> Result<Session, StoreError> {
        self.enter("sign_up")?;
        let mut data = self.data.lock().unwrap();
        if data.accounts.iter().any(|(e, _, _)| e == email) {
            return Err(StoreError::Api {
                status: 409,
                code: "CONFLICT".into(),
                message: "email taken".into(),
            });
        }
        let user = User {
            id: data.next_id(),
            email: email.to_string(),
        };
        data.accounts
            .push((email.to_string(), password.to_string(), user.clone()));
        data.actor = Some(user.clone());
        Ok(session_for(&user))
    }

    async fn restore_session(&self, refresh_token: &str) -> Result<Session, StoreError> {
        self.enter("restore_session")?;
        let mut data = self.data.lock().unwrap();
        let user = data
            .accounts
            .iter()
            .map(|(_, _, u)| u)
            .find(|u| session_for(u).refresh_token == refresh_token)
            .cloned()
            .ok_or_else(|| StoreError::Unauthorized("Invalid or expired refresh token".into()))?;
        data.actor = Some(user.clone());
        Ok(session_for(&user))
    }

    async fn sign_out(&self) -> Result<(), StoreError> {
        self.enter("sign_out")?;
        self.data.lock().unwrap().actor = None;
        Ok(())
    }

    async fn list_regionais(&self) -> Result<Vec<Regional>, StoreError> {
        self.enter("list_regionais")?;
        let mut rows = self.data.lock().unwrap().regionais.clone();
        rows.sort_by(|a, b| a.nome_regional.cmp(&b.nome_regional));
        Ok(rows)
    }

    async fn create_regional(&self, input: &RegionalPayload) -> Result<Regional, StoreError> {
        self.enter("create_regional")?;
        let id = self.seed_regional(&input.nome_regional);
        let data = self.data.lock().unwrap();
        Ok(data.regionais.iter().find(|r| r.id == id).cloned().unwrap())
    }

    async fn update_regional(
        &self,
        id: DbId,
        input: &RegionalPayload,
    ) -> Result<Regional, StoreError> {
        self.enter("update_regional")?;
        let mut data = self.data.lock().unwrap();
        let row = data.regionais.iter_mut().find(|r| r.id == id).ok_or_else(not_found)?;
        row.nome_regional = input.nome_regional.clone();
        Ok(row.clone())
    }

    async fn delete_regional(&self, id: DbId) -> Result<(), StoreError> {
        self.enter("delete_regional")?;
        let mut data = self.data.lock().unwrap();
        let referenced = data.responsaveis.iter().any(|r| r.regional_id == id)
            || data.planos.iter().any(|p| p.regional_id == id);
        if referenced {
            return Err(StoreError::DependentRecords(
                "Cannot delete Regional: dependent records exist".into(),
            ));
        }
        let before = data.regionais.len();
        data.regionais.retain(|r| r.id != id);
        if data.regionais.len() == before {
            return Err(not_found());
        }
        Ok(())
    }

    async fn list_responsaveis(&self) -> Result<Vec<Responsavel>, StoreError> {
        self.enter("list_responsaveis")?;
        let data = self.data.lock().unwrap();
        let mut rows: Vec<Responsavel> = data
            .responsaveis
            .iter()
            .map(|r| data.joined_responsavel(r))
            .collect();
        rows.sort_by(|a, b| a.nome_responsavel.cmp(&b.nome_responsavel));
        Ok(rows)
    }

    async fn create_responsavel(
        &self,
        input: &ResponsavelPayload,
    ) -> Result<Responsavel, StoreError> {
        self.enter("create_responsavel")?;
        if self.data.lock().unwrap().regional_name(input.regional_id).is_none() {
            return Err(invalid_reference());
        }
        let id = self.seed_responsavel(&input.nome_responsavel, input.regional_id);
        let data = self.data.lock().unwrap();
        let row = data.responsaveis.iter().find(|r| r.id == id).unwrap();
        Ok(data.joined_responsavel(row))
    }

    async fn update_responsavel(
        &self,
        id: DbId,
        input: &ResponsavelPayload,
    ) -> Result<Responsavel, StoreError> {
        self.enter("update_responsavel")?;
        let mut data = self.data.lock().unwrap();
        if data.regional_name(input.regional_id).is_none() {
            return Err(invalid_reference());
        }
        let row = data
            .responsaveis
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(not_found)?;
        row.nome_responsavel = input.nome_responsavel.clone();
        row.regional_id = input.regional_id;
        let row = row.clone();
        Ok(data.joined_responsavel(&row))
    }

    async fn delete_responsavel(&self, id: DbId) -> Result<(), StoreError> {
        self.enter("delete_responsavel")?;
        let mut data = self.data.lock().unwrap();
        if data.planos.iter().any(|p| p.responsavel_id == id) {
            return Err(StoreError::DependentRecords(
                "Cannot delete Responsavel: dependent records exist".into(),
            ));
        }
        let before = data.responsaveis.len();
        data.responsaveis.retain(|r| r.id != id);
        if data.responsaveis.len() == before {
            return Err(not_found());
        }
        Ok(())
    }

    async fn list_planos(&self, filter: &PlanoFilter) -> Result<Vec<PlanoAnual>, StoreError> {
        self.enter("list_planos")?;
        let data = self.data.lock().unwrap();
        let mut rows: Vec<PlanoAnual> = data
            .planos
            .iter()
            .filter(|p| filter.matches(p.regional_id, p.responsavel_id, p.status))
            .map(|p| data.joined_plano(p))
            .collect();
        rows.sort_by(|a, b| b.prazo_fim.cmp(&a.prazo_fim));
        Ok(rows)
    }

    async fn create_plano(&self, input: &PlanoPayload) -> Result<PlanoAnual, StoreError> {
        self.enter("create_plano")?;
        let mut data = self.data.lock().unwrap();
        if data.regional_name(input.regional_id).is_none()
            || data.responsavel_name(input.responsavel_id).is_none()
        {
            return Err(invalid_reference());
        }
        Ok(insert_plano(&mut data, input))
    }

    async fn update_plano(
        &self,
        id: DbId,
        input: &PlanoPayload,
    ) -> Result<PlanoAnual, StoreError> {
        self.enter("update_plano")?;
        let mut data = self.data.lock().unwrap();
        let row = data.planos.iter_mut().find(|p| p.id == id).ok_or_else(not_found)?;
        row.regional_id = input.regional_id;
        row.responsavel_id = input.responsavel_id;
        row.acao = input.acao.clone();
        row.descricao = input.descricao.clone();
        row.objetivo = input.objetivo.clone();
        row.prazo_inicio = input.prazo_inicio;
        row.prazo_fim = input.prazo_fim;
        row.status = input.status;
        row.observacoes = input.observacoes.clone();
        row.data_atualizacao = Utc::now();
        let row = row.clone();
        Ok(data.joined_plano(&row))
    }

    async fn delete_plano(&self, id: DbId) -> Result<(), StoreError> {
        self.enter("delete_plano")?;
        let mut data = self.data.lock().unwrap();
        let before = data.planos.len();
        data.planos.retain(|p| p.id != id);
        if data.planos.len() == before {
            return Err(not_found());
        }
        Ok(())
    }
}
