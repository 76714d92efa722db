//! User-facing messages (pt-BR).
//!
//! Screens show exactly one of these on failure. Transport and store details
//! go to the log, never to the user.

pub const LOAD_DATA_FAILED: &str = "Erro ao carregar dados";
pub const LOAD_PLANOS_FAILED: &str = "Erro ao carregar planos";
pub const LOAD_REGIONAIS_FAILED: &str = "Erro ao carregar regionais";
pub const LOAD_STATS_FAILED: &str = "Erro ao carregar estatísticas";

pub const FILL_ALL_FIELDS: &str = "Preencha todos os campos";
pub const FILL_REQUIRED_FIELDS: &str = "Preencha todos os campos obrigatórios";

pub const SAVE_PLANO_FAILED: &str = "Erro ao salvar plano";
pub const DELETE_PLANO_FAILED: &str = "Erro ao excluir plano";

pub const CREATE_REGIONAL_FAILED: &str = "Erro ao adicionar regional";
pub const UPDATE_REGIONAL_FAILED: &str = "Erro ao atualizar regional";
pub const DELETE_REGIONAL_FAILED: &str = "Erro ao excluir regional";
pub const DELETE_REGIONAL_HAS_DEPENDENTS: &str =
    "Erro ao excluir regional. Verifique se não há responsáveis vinculados.";

pub const CREATE_RESPONSAVEL_FAILED: &str = "Erro ao adicionar responsável";
pub const UPDATE_RESPONSAVEL_FAILED: &str = "Erro ao atualizar responsável";
pub const DELETE_RESPONSAVEL_FAILED: &str = "Erro ao excluir responsável";
pub const DELETE_RESPONSAVEL_HAS_DEPENDENTS: &str =
    "Erro ao excluir responsável. Verifique se não há planos vinculados.";

pub const LOGIN_FAILED: &str = "Email ou senha inválidos";
pub const REGISTER_FAILED: &str = "Erro ao criar conta";
pub const SIGN_OUT_FAILED: &str = "Erro ao sair";

pub const CONFIRM_DELETE_PLANO: &str = "Tem certeza que deseja excluir este plano?";
pub const CONFIRM_DELETE_REGIONAL: &str = "Tem certeza que deseja excluir esta regional?";
pub const CONFIRM_DELETE_RESPONSAVEL: &str = "Tem certeza que deseja excluir este responsável?";
pub const CONFIRM_SIGN_OUT: &str = "Deseja realmente sair?";

pub const OFFLINE_BANNER: &str =
    "Você está offline. Algumas funcionalidades podem estar limitadas.";
