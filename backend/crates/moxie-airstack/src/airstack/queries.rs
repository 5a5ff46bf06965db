//! GraphQL documents sent to Airstack.

pub(crate) const USER_SOCIAL_CAPITAL_QUERY: &str = r#"
query GetUserSocialCapital($userId: String!) {
  Socials(
    input: {filter: {userId: {_eq: $userId}}, blockchain: ethereum}
  ) {
    Social {
      profileName
      profileDisplayName
      userId
      profileBio
      profileImage
      profileImageContentValue {
        image {
          extraSmall
        }
      }
      socialCapital {
        socialCapitalScore
        socialCapitalRank
      }
    }
  }
}
"#;

pub(crate) const MOXIE_EARNINGS_QUERY: &str = r#"
query MoxieEarnings($entityId: String!, $timeframe: FarcasterMoxieEarningStatsTimeframe!) {
  FarcasterMoxieEarningStats(
    input: {filter: {entityType: {_eq: USER}, entityId: {_eq: $entityId}}, timeframe: $timeframe, blockchain: ALL}
  ) {
    FarcasterMoxieEarningStat {
      allEarningsAmount
      frameDevEarningsAmount
      entityId
      entityType
      castEarningsAmount
      otherEarningsAmount
    }
  }
}
"#;
