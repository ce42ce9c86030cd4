//! Static table of every command this server version supports.
//!
//! Keep entries sorted by name. Lookup does not depend on order.

use cmdreg_common::ids::{
    CommandId, HashOperation, ListOperation, SetOperation, SortedSetOperation,
};

use crate::entry::{CommandEntry, FamilyOperation};

fn hash(name: &str, operation: HashOperation) -> CommandEntry {
    CommandEntry::multiplexed(name, FamilyOperation::Hash(operation))
}

fn list(name: &str, operation: ListOperation) -> CommandEntry {
    CommandEntry::multiplexed(name, FamilyOperation::List(operation))
}

fn set(name: &str, operation: SetOperation) -> CommandEntry {
    CommandEntry::multiplexed(name, FamilyOperation::Set(operation))
}

fn sorted_set(name: &str, operation: SortedSetOperation) -> CommandEntry {
    CommandEntry::multiplexed(name, FamilyOperation::SortedSet(operation))
}

/// Returns the supported-command table in alphabetical order.
#[must_use]
pub(super) fn supported_commands() -> Vec<CommandEntry> {
    vec![
        CommandEntry::container(
            "ACL",
            CommandId::Acl,
            [
                "ACL|CAT",
                "ACL|DELUSER",
                "ACL|LIST",
                "ACL|LOAD",
                "ACL|SETUSER",
                "ACL|USERS",
                "ACL|WHOAMI",
            ],
        ),
        CommandEntry::simple("APPEND", CommandId::Append),
        CommandEntry::simple("ASKING", CommandId::Asking),
        CommandEntry::simple("AUTH", CommandId::Auth),
        CommandEntry::simple("BGSAVE", CommandId::Bgsave),
        CommandEntry::simple("BITCOUNT", CommandId::Bitcount),
        CommandEntry::simple("BITFIELD", CommandId::Bitfield),
        CommandEntry::simple("BITOP", CommandId::Bitop),
        CommandEntry::simple("BITPOS", CommandId::Bitpos),
        CommandEntry::simple("CLIENT", CommandId::Client),
        CommandEntry::container(
            "CLUSTER",
            CommandId::Cluster,
            [
                "CLUSTER|ADDSLOTS",
                "CLUSTER|ADDSLOTSRANGE",
                "CLUSTER|BUMPEPOCH",
                "CLUSTER|COUNTKEYSINSLOT",
                "CLUSTER|DELSLOTS",
                "CLUSTER|DELSLOTSRANGE",
                "CLUSTER|FAILOVER",
                "CLUSTER|FORGET",
                "CLUSTER|GETKEYSINSLOT",
                "CLUSTER|INFO",
                "CLUSTER|KEYSLOT",
                "CLUSTER|MEET",
                "CLUSTER|MYID",
                "CLUSTER|NODES",
                "CLUSTER|REPLICAS",
                "CLUSTER|REPLICATE",
                "CLUSTER|RESET",
                "CLUSTER|SET-CONFIG-EPOCH",
                "CLUSTER|SETSLOT",
                "CLUSTER|SLOTS",
            ],
        ),
        CommandEntry::container(
            "COMMAND",
            CommandId::Command,
            [
                "COMMAND|INFO",
                "COMMAND|COUNT",
            ],
        ),
        CommandEntry::simple("COMMITAOF", CommandId::Commitaof),
        CommandEntry::container(
            "CONFIG",
            CommandId::Config,
            [
                "CONFIG|GET",
                "CONFIG|SET",
                "CONFIG|REWRITE",
            ],
        ),
        CommandEntry::wildcard("COSCAN", CommandId::Coscan),
        CommandEntry::simple("DBSIZE", CommandId::Dbsize),
        CommandEntry::simple("DECR", CommandId::Decr),
        CommandEntry::simple("DECRBY", CommandId::Decrby),
        CommandEntry::simple("DEL", CommandId::Del),
        CommandEntry::simple("DISCARD", CommandId::Discard),
        CommandEntry::simple("ECHO", CommandId::Echo),
        CommandEntry::simple("EXEC", CommandId::Exec),
        CommandEntry::simple("EXISTS", CommandId::Exists),
        CommandEntry::simple("EXPIRE", CommandId::Expire),
        CommandEntry::simple("FLUSHDB", CommandId::Flushdb),
        sorted_set("GEOADD", SortedSetOperation::Geoadd),
        sorted_set("GEODIST", SortedSetOperation::Geodist),
        sorted_set("GEOHASH", SortedSetOperation::Geohash),
        sorted_set("GEOPOS", SortedSetOperation::Geopos),
        sorted_set("GEOSEARCH", SortedSetOperation::Geosearch),
        CommandEntry::simple("GET", CommandId::Get),
        CommandEntry::simple("GETBIT", CommandId::Getbit),
        CommandEntry::simple("GETDEL", CommandId::Getdel),
        CommandEntry::simple("GETRANGE", CommandId::Getrange),
        hash("HDEL", HashOperation::Hdel),
        hash("HEXISTS", HashOperation::Hexists),
        hash("HGET", HashOperation::Hget),
        hash("HGETALL", HashOperation::Hgetall),
        hash("HINCRBY", HashOperation::Hincrby),
        hash("HINCRBYFLOAT", HashOperation::Hincrbyfloat),
        hash("HKEYS", HashOperation::Hkeys),
        hash("HLEN", HashOperation::Hlen),
        hash("HMGET", HashOperation::Hmget),
        hash("HMSET", HashOperation::Hmset),
        hash("HRANDFIELD", HashOperation::Hrandfield),
        hash("HSCAN", HashOperation::Hscan),
        hash("HSET", HashOperation::Hset),
        hash("HSETNX", HashOperation::Hsetnx),
        hash("HSTRLEN", HashOperation::Hstrlen),
        hash("HVALS", HashOperation::Hvals),
        CommandEntry::simple("INCR", CommandId::Incr),
        CommandEntry::simple("INCRBY", CommandId::Incrby),
        CommandEntry::simple("INFO", CommandId::Info),
        CommandEntry::simple("KEYS", CommandId::Keys),
        CommandEntry::simple("LASTSAVE", CommandId::Lastsave),
        CommandEntry::container(
            "LATENCY",
            CommandId::Latency,
            [
                "LATENCY|HISTOGRAM",
                "LATENCY|RESET",
            ],
        ),
        list("LINDEX", ListOperation::Lindex),
        list("LINSERT", ListOperation::Linsert),
        list("LLEN", ListOperation::Llen),
        list("LMOVE", ListOperation::Lmove),
        list("LPOP", ListOperation::Lpop),
        list("LPUSH", ListOperation::Lpush),
        list("LPUSHX", ListOperation::Lpushx),
        list("LRANGE", ListOperation::Lrange),
        list("LREM", ListOperation::Lrem),
        list("LTRIM", ListOperation::Ltrim),
        CommandEntry::container(
            "MEMORY",
            CommandId::Memory,
            [
                "MEMORY|USAGE",
            ],
        ),
        CommandEntry::simple("MGET", CommandId::Mget),
        CommandEntry::simple("MIGRATE", CommandId::Migrate),
        CommandEntry::simple("MODULE", CommandId::Module),
        CommandEntry::simple("MONITOR", CommandId::Monitor),
        CommandEntry::simple("MSET", CommandId::Mset),
        CommandEntry::simple("MSETNX", CommandId::Msetnx),
        CommandEntry::simple("MULTI", CommandId::Multi),
        CommandEntry::simple("PERSIST", CommandId::Persist),
        CommandEntry::simple("PEXPIRE", CommandId::Pexpire),
        CommandEntry::simple("PFADD", CommandId::Pfadd),
        CommandEntry::simple("PFCOUNT", CommandId::Pfcount),
        CommandEntry::simple("PFMERGE", CommandId::Pfmerge),
        CommandEntry::simple("PING", CommandId::Ping),
        CommandEntry::simple("PSETEX", CommandId::Psetex),
        CommandEntry::simple("PSUBSCRIBE", CommandId::Psubscribe),
        CommandEntry::simple("PTTL", CommandId::Pttl),
        CommandEntry::simple("PUBLISH", CommandId::Publish),
        CommandEntry::simple("PUNSUBSCRIBE", CommandId::Punsubscribe),
        CommandEntry::simple("QUIT", CommandId::Quit),
        CommandEntry::simple("READONLY", CommandId::Readonly),
        CommandEntry::simple("REGISTERCS", CommandId::Registercs),
        CommandEntry::simple("RENAME", CommandId::Rename),
        CommandEntry::simple("REPLICAOF", CommandId::Replicaof),
        CommandEntry::simple("RESET", CommandId::Reset),
        list("RPOP", ListOperation::Rpop),
        list("RPOPLPUSH", ListOperation::Rpoplpush),
        list("RPUSH", ListOperation::Rpush),
        list("RPUSHX", ListOperation::Rpushx),
        set("SADD", SetOperation::Sadd),
        CommandEntry::simple("SAVE", CommandId::Save),
        CommandEntry::simple("SCAN", CommandId::Scan),
        set("SCARD", SetOperation::Scard),
        CommandEntry::simple("SELECT", CommandId::Select),
        CommandEntry::simple("SET", CommandId::Set),
        CommandEntry::simple("SETBIT", CommandId::Setbit),
        CommandEntry::simple("SETEX", CommandId::Setex),
        CommandEntry::simple("SETEXNX", CommandId::Setexnx),
        CommandEntry::simple("SETEXXX", CommandId::Setexxx),
        CommandEntry::simple("SETRANGE", CommandId::Setrange),
        set("SISMEMBER", SetOperation::Sismember),
        CommandEntry::simple("SLAVEOF", CommandId::Secondaryof),
        set("SMEMBERS", SetOperation::Smembers),
        set("SPOP", SetOperation::Spop),
        set("SRANDMEMBER", SetOperation::Srandmember),
        set("SREM", SetOperation::Srem),
        set("SSCAN", SetOperation::Sscan),
        CommandEntry::simple("STRLEN", CommandId::Strlen),
        CommandEntry::simple("SUBSCRIBE", CommandId::Subscribe),
        CommandEntry::simple("TIME", CommandId::Time),
        CommandEntry::simple("TTL", CommandId::Ttl),
        CommandEntry::simple("TYPE", CommandId::Type),
        CommandEntry::simple("UNLINK", CommandId::Unlink),
        CommandEntry::simple("UNSUBSCRIBE", CommandId::Unsubscribe),
        CommandEntry::simple("UNWATCH", CommandId::Unwatch),
        CommandEntry::simple("WATCH", CommandId::Watch),
        sorted_set("ZADD", SortedSetOperation::Zadd),
        sorted_set("ZCARD", SortedSetOperation::Zcard),
        sorted_set("ZCOUNT", SortedSetOperation::Zcount),
        sorted_set("ZDIFF", SortedSetOperation::Zdiff),
        sorted_set("ZINCRBY", SortedSetOperation::Zincrby),
        sorted_set("ZLEXCOUNT", SortedSetOperation::Zlexcount),
        sorted_set("ZMSCORE", SortedSetOperation::Zmscore),
        sorted_set("ZPOPMAX", SortedSetOperation::Zpopmax),
        sorted_set("ZPOPMIN", SortedSetOperation::Zpopmin),
        sorted_set("ZRANDMEMBER", SortedSetOperation::Zrandmember),
        sorted_set("ZRANGE", SortedSetOperation::Zrange),
        sorted_set("ZRANGEBYSCORE", SortedSetOperation::Zrangebyscore),
        sorted_set("ZRANK", SortedSetOperation::Zrank),
        sorted_set("ZREM", SortedSetOperation::Zrem),
        sorted_set("ZREMRANGEBYLEX", SortedSetOperation::Zremrangebylex),
        sorted_set("ZREMRANGEBYRANK", SortedSetOperation::Zremrangebyrank),
        sorted_set("ZREMRANGEBYSCORE", SortedSetOperation::Zremrangebyscore),
        sorted_set("ZREVRANGE", SortedSetOperation::Zrevrange),
        sorted_set("ZREVRANK", SortedSetOperation::Zrevrank),
        sorted_set("ZSCAN", SortedSetOperation::Zscan),
        sorted_set("ZSCORE", SortedSetOperation::Zscore),
    ]
}
