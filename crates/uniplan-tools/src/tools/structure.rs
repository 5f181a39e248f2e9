//! University structure tools: directory listings and group detail.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};
use uniplan_errors::{ErrorKind, Result, UniError};

use crate::context::ToolContext;
use crate::registry::{parse_args, to_result_value, ToolEntry, ToolHandler};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "lowercase")]
enum DirectoryName {
    Faculties,
    Departments,
    Specialities,
    Groups,
    Auditories,
}

#[derive(Debug, Deserialize)]
struct DirectoriesGetArgs {
    directory_name: DirectoryName,
    #[serde(default)]
    faculty_id: Option<i64>,
    #[serde(default)]
    specialty_id: Option<i64>,
}

struct DirectoriesGet;

#[async_trait]
impl ToolHandler for DirectoriesGet {
    async fn call(&self, ctx: &ToolContext, args: Value) -> Result<Value> {
        let args: DirectoriesGetArgs = parse_args(args)?;
        match args.directory_name {
            DirectoryName::Faculties => to_result_value(&ctx.structure.faculties().await?),
            DirectoryName::Departments => to_result_value(&ctx.structure.departments().await?),
            DirectoryName::Auditories => to_result_value(&ctx.structure.auditories().await?),
            DirectoryName::Specialities => {
                to_result_value(&ctx.structure.specialities(args.faculty_id).await?)
            }
            DirectoryName::Groups => {
                to_result_value(&ctx.structure.groups(args.specialty_id).await?)
            }
        }
    }
}

#[derive(Debug, Deserialize)]
struct GroupInfoArgs {
    group_name: String,
}

struct GroupInfo;

#[async_trait]
impl ToolHandler for GroupInfo {
    async fn call(&self, ctx: &ToolContext, args: Value) -> Result<Value> {
        let args: GroupInfoArgs = parse_args(args)?;
        let info = ctx
            .structure
            .group_info(&args.group_name)
            .await?
            .ok_or_else(|| {
                UniError::new(ErrorKind::NotFound)
                    .with_op("group_info")
                    .with_message(format!("Group {} not found", args.group_name))
            })?;
        to_result_value(&info)
    }
}

pub(crate) fn entries() -> Vec<ToolEntry> {
    vec![
        ToolEntry::new(
            "directories_get",
            "Lists university structure: faculties, departments, auditories, \
             specialities (optionally by faculty), groups (optionally by speciality). \
             Not a people search.",
            json!({
                "type": "object",
                "properties": {
                    "directory_name": {
                        "type": "string",
                        "enum": ["faculties", "departments", "specialities", "groups", "auditories"],
                    },
                    "faculty_id": {
                        "type": "integer",
                        "description": "Filter for directory_name='specialities'",
                    },
                    "specialty_id": {
                        "type": "integer",
                        "description": "Filter for directory_name='groups'",
                    },
                },
                "required": ["directory_name"],
            }),
            Arc::new(DirectoriesGet),
        ),
        ToolEntry::new(
            "structure_group_info",
            "Detailed information about one group: speciality, course, faculty.",
            json!({
                "type": "object",
                "properties": {
                    "group_name": {
                        "type": "string",
                        "description": "Group number, e.g. '221703'",
                    },
                },
                "required": ["group_name"],
            }),
            Arc::new(GroupInfo),
        ),
    ]
}
